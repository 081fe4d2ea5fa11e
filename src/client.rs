use super::*;

#[derive(Debug, thiserror::Error)]
pub(crate) enum LoadFault {
  #[error("{0}")]
  Injected(String),
  #[error("could not parse stories from {}", path.display())]
  Parse {
    path: PathBuf,
    #[source]
    source: serde_json::Error,
  },
  #[error("could not read stories from {}", path.display())]
  Read {
    path: PathBuf,
    #[source]
    source: io::Error,
  },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Source {
  Failing(String),
  File(PathBuf),
  Sample,
}

/// Delivers the story collection after a fixed delay.
#[derive(Clone, Debug)]
pub(crate) struct Client {
  delay: Duration,
  source: Source,
}

impl Client {
  pub(crate) async fn fetch_stories(&self) -> Result<Vec<Story>, LoadFault> {
    tokio::time::sleep(self.delay).await;

    match &self.source {
      Source::Sample => Ok(Story::samples()),
      Source::File(path) => {
        let data =
          tokio::fs::read(path)
            .await
            .map_err(|source| LoadFault::Read {
              path: path.clone(),
              source,
            })?;

        serde_json::from_slice::<Vec<Story>>(&data).map_err(|source| {
          LoadFault::Parse {
            path: path.clone(),
            source,
          }
        })
      }
      Source::Failing(reason) => Err(LoadFault::Injected(reason.clone())),
    }
  }

  pub(crate) fn new(source: Source, delay: Duration) -> Self {
    Self { delay, source }
  }
}
