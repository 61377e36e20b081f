//! Keep records modelled on real Takeout output.

pub const GROCERIES: &str = r#"{
  "color": "DEFAULT",
  "isTrashed": false,
  "isPinned": false,
  "isArchived": false,
  "listContent": [
    {"textHtml": "Milk", "text": "Milk", "isChecked": false},
    {"textHtml": "Eggs", "text": "Eggs", "isChecked": true}
  ],
  "title": "Groceries",
  "userEditedTimestampUsec": 1600000000000000,
  "createdTimestampUsec": 1590000000000000,
  "labels": [{"name": "home"}]
}"#;

pub const CALL_MOM: &str = r#"{
  "color": "DEFAULT",
  "isTrashed": false,
  "isPinned": false,
  "isArchived": false,
  "textContent": "Call mom",
  "title": "",
  "userEditedTimestampUsec": 1600000000000000
}"#;

pub const PHOTO_MISSING: &str = r#"{
  "attachments": [{"filePath": "photo1.jpg", "mimetype": "image/jpeg"}],
  "color": "DEFAULT",
  "isTrashed": false,
  "isPinned": false,
  "isArchived": false,
  "textContent": "Sunset at the beach",
  "title": "Beach",
  "userEditedTimestampUsec": 1600000000000000
}"#;

pub const PHOTO_PRESENT: &str = r#"{
  "attachments": [{"filePath": "sunrise.png", "mimetype": "image/png"}],
  "color": "YELLOW",
  "isTrashed": false,
  "isPinned": true,
  "isArchived": false,
  "textContent": "Sunrise",
  "title": "Morning",
  "userEditedTimestampUsec": 1600000000000000,
  "labels": [{"name": "photos"}, {"name": "photos"}, {"name": "to sort"}]
}"#;
