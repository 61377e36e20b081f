use keep_lib::model::{Annotation, AnnotationSource, Color, Label};
use keep_lib::{KeepNote, ListItem, RenderOptions, render_note};

#[test]
fn test_checklist_document_snapshot() {
    let note = KeepNote {
        title: "Groceries".to_string(),
        list_content: Some(vec![
            ListItem {
                text: "Milk".to_string(),
                is_checked: false,
            },
            ListItem {
                text: "Eggs".to_string(),
                is_checked: true,
            },
        ]),
        labels: vec![
            Label {
                name: "home".to_string(),
            },
            Label {
                name: "shopping list".to_string(),
            },
        ],
        color: Color::Green,
        annotations: vec![Annotation {
            source: AnnotationSource::Weblink,
            title: "Recipe".to_string(),
            url: "https://example.com/recipe".to_string(),
            description: "Pancakes".to_string(),
        }],
        ..Default::default()
    };
    let assets = vec!["receipt.jpg".to_string()];
    let rendered = render_note(&note, &assets, &RenderOptions::default());

    insta::assert_snapshot!(rendered.text, @r"
    # Groceries
    - Milk
    + Eggs

    [Recipe](https://example.com/recipe)
    > Pancakes

    [assets/receipt.jpg]

    #home #shopping list# #GREEN
    ");
}
