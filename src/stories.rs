//! The story collection and the actions that drive it.
//!
//! Items are kept beside the load status rather than inside it: starting a
//! load, failing a load, and dismissing a story all leave the other half
//! untouched.

use super::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum LoadStatus {
  Failed,
  #[default]
  Idle,
  Loaded,
  Loading,
}

/// The closed set of transitions. Anything outside it cannot be built, so
/// `apply` has no failure path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum StoriesAction {
  FetchFailure,
  FetchInit,
  FetchSuccess(Vec<Story>),
  RemoveStory(Story),
}

impl StoriesAction {
  pub(crate) fn name(&self) -> &'static str {
    match self {
      StoriesAction::FetchFailure => "FETCH_FAILURE",
      StoriesAction::FetchInit => "FETCH_INIT",
      StoriesAction::FetchSuccess(_) => "FETCH_SUCCESS",
      StoriesAction::RemoveStory(_) => "REMOVE_STORY",
    }
  }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Stories {
  items: Vec<Story>,
  status: LoadStatus,
}

impl Stories {
  pub(crate) fn apply(&mut self, action: StoriesAction) {
    debug!(action = action.name(), status = ?self.status, "applying stories action");

    match action {
      StoriesAction::FetchInit => self.status = LoadStatus::Loading,
      StoriesAction::FetchSuccess(payload) => {
        self.items = payload;
        self.status = LoadStatus::Loaded;
      }
      StoriesAction::FetchFailure => self.status = LoadStatus::Failed,
      StoriesAction::RemoveStory(target) => self
        .items
        .retain(|story| story.object_id != target.object_id),
    }
  }

  /// Stories whose title contains `term`, in collection order.
  pub(crate) fn filtered<'a>(
    &'a self,
    term: &'a str,
  ) -> impl Iterator<Item = &'a Story> + 'a {
    self.items.iter().filter(move |story| story.matches(term))
  }

  pub(crate) fn is_error(&self) -> bool {
    self.status == LoadStatus::Failed
  }

  pub(crate) fn is_loading(&self) -> bool {
    self.status == LoadStatus::Loading
  }

  pub(crate) fn items(&self) -> &[Story] {
    &self.items
  }

  pub(crate) fn status(&self) -> LoadStatus {
    self.status
  }
}
