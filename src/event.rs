use super::*;

pub(crate) enum Event {
  Stories {
    request_id: u64,
    result: Result<Vec<Story>, LoadFault>,
  },
}
