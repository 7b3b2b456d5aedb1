use super::LoadError;
use std::convert::Infallible;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Where the offer dataset lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    File(PathBuf),
    Url(String),
}

impl DataSource {
    /// `http://` and `https://` locations are URLs, anything else is a path
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            DataSource::Url(trimmed.to_string())
        } else {
            DataSource::File(PathBuf::from(trimmed))
        }
    }

    /// Read the raw dataset bytes
    pub async fn fetch(&self, http: &reqwest::Client) -> Result<Vec<u8>, LoadError> {
        match self {
            DataSource::File(path) => {
                tokio::fs::read(path).await.map_err(|source| LoadError::Io {
                    path: path.clone(),
                    source,
                })
            }
            DataSource::Url(url) => {
                let response = http.get(url).send().await?;

                let status = response.status();
                if !status.is_success() {
                    let body = response
                        .text()
                        .await
                        .unwrap_or_else(|_| "Unknown error".to_string());
                    return Err(LoadError::Status {
                        status: status.as_u16(),
                        body,
                    });
                }

                Ok(response.bytes().await?.to_vec())
            }
        }
    }
}

impl FromStr for DataSource {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::File(path) => write!(f, "{}", path.display()),
            DataSource::Url(url) => f.write_str(url),
        }
    }
}
