#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Command {
  DismissSelected,
  FinishSearch,
  HideHelp,
  None,
  OpenCurrentInBrowser,
  PageDown,
  PageUp,
  Quit,
  SelectFirst,
  SelectLast,
  SelectNext,
  SelectPrevious,
  ShowHelp,
  StartSearch,
  UpdateSearch(String),
}
