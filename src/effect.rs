#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Effect {
  FetchStories { request_id: u64 },
  OpenUrl { url: String },
}
