use std::fmt;

#[derive(Debug)]
pub enum ClientError {
    /// Falha de transporte ou de decodificação da resposta
    Http(reqwest::Error),
    /// 404 do servidor, com a mensagem do corpo `{error}`
    NotFound(String),
    Status(u16),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Http(e) => write!(f, "HTTP error: {}", e),
            ClientError::NotFound(msg) => write!(f, "Not found: {}", msg),
            ClientError::Status(code) => write!(f, "Unexpected status: {}", code),
        }
    }
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ClientError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        ClientError::Http(e)
    }
}
