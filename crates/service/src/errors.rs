use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    #[error("Le phone fourni avec l’identifiant '{identifier}' n’existe pas ou n’a pas été trouvé.")]
    NotFound { identifier: String },
}

impl ServiceError {
    pub fn not_found(identifier: &str) -> Self {
        Self::NotFound { identifier: identifier.to_string() }
    }
}
