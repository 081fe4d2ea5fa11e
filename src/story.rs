use super::*;

#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
pub(crate) struct Story {
  pub(crate) author: String,
  pub(crate) num_comments: u64,
  #[serde(rename = "objectID")]
  pub(crate) object_id: u64,
  pub(crate) points: i64,
  pub(crate) title: String,
  #[serde(default)]
  pub(crate) url: String,
}

impl Story {
  pub(crate) fn detail(&self) -> String {
    format!(
      "{} by {} • {}",
      format_points(self.points),
      self.author,
      format_comments(self.num_comments)
    )
  }

  /// Case-insensitive substring match on the title only.
  pub(crate) fn matches(&self, term: &str) -> bool {
    self.title.to_lowercase().contains(&term.to_lowercase())
  }

  pub(crate) fn samples() -> Vec<Story> {
    vec![
      Story {
        author: "Jordan Walke".into(),
        num_comments: 3,
        object_id: 0,
        points: 4,
        title: "React".into(),
        url: "https://reactjs.org/".into(),
      },
      Story {
        author: "Dan Abramov, Andrew Clark".into(),
        num_comments: 2,
        object_id: 1,
        points: 5,
        title: "Redux".into(),
        url: "https://redux.js.org/".into(),
      },
    ]
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn matches_ignores_case() {
    let [react, redux] = <[Story; 2]>::try_from(Story::samples()).unwrap();

    assert!(react.matches("REA"));
    assert!(!react.matches("ux"));
    assert!(redux.matches("ux"));
    assert!(redux.matches(""));
  }

  #[test]
  fn matches_does_not_look_at_author_or_url() {
    let redux = Story::samples().remove(1);

    assert!(!redux.matches("abramov"));
    assert!(!redux.matches("js.org"));
  }

  #[test]
  fn deserializes_object_id_field() {
    let story = serde_json::from_str::<Story>(
      r#"{
        "title": "Rust",
        "url": "https://rust-lang.org",
        "author": "ferris",
        "num_comments": 7,
        "points": -2,
        "objectID": 9
      }"#,
    )
    .unwrap();

    assert_eq!(story.object_id, 9);
    assert_eq!(story.points, -2);
    assert_eq!(story.detail(), "-2 points by ferris • 7 comments");
  }

  #[test]
  fn missing_url_defaults_to_empty() {
    let story = serde_json::from_str::<Story>(
      r#"{"title": "t", "author": "a", "num_comments": 0, "points": 1, "objectID": 1}"#,
    )
    .unwrap();

    assert!(story.url.is_empty());
  }
}
