use thiserror::Error;

/// Field-level rule violations. Messages are the ones shown to the user.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("Nome é obrigatório")]
    NameRequired,
    #[error("Email é obrigatório")]
    EmailRequired,
    #[error("Email inválido")]
    InvalidEmail,
    #[error("Senha é obrigatória")]
    PasswordRequired,
    #[error("Senha deve ter pelo menos 6 caracteres")]
    PasswordTooShort,
    #[error("Senhas não coincidem")]
    PasswordMismatch,
    #[error("Telefone é obrigatório")]
    PhoneRequired,
    #[error("Telefone deve ter pelo menos 10 dígitos")]
    PhoneTooShort,
    #[error("CPF é obrigatório")]
    CpfRequired,
    #[error("CPF inválido")]
    InvalidCpf,
    #[error("Altura deve estar entre 100 e 250 cm")]
    InvalidHeight,
    #[error("Peso deve estar entre 30 e 300 kg")]
    InvalidWeight,
}
