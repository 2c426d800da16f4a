use heron::{Algorithm, Error, MapDocument, NodeDocument, layout_json};

const DIAMOND: &str = r#"{
  "root": "start",
  "nodes": [
    { "id": "start", "next": ["left", "right"] },
    { "id": "left", "next": ["end"] },
    { "id": "right", "next": ["end"] },
    { "id": "end" }
  ]
}"#;

#[test]
fn document_builds_the_map_in_declaration_order() {
    let doc = MapDocument::from_json(DIAMOND).unwrap();
    assert_eq!(doc.root, "start");

    let map = doc.to_map().unwrap();
    assert_eq!(
        map.nodes().collect::<Vec<_>>(),
        vec!["start", "left", "right", "end"]
    );
    assert_eq!(map.successors("start"), vec!["left", "right"]);
    assert_eq!(map.predecessors("end"), vec!["left", "right"]);
}

#[test]
fn document_rejects_duplicate_ids() {
    let doc = MapDocument {
        root: "a".to_string(),
        nodes: vec![
            NodeDocument {
                id: "a".to_string(),
                next: vec![],
            },
            NodeDocument {
                id: "a".to_string(),
                next: vec![],
            },
        ],
    };
    assert!(matches!(doc.to_map(), Err(Error::DuplicateNode { ref id }) if id == "a"));
}

#[test]
fn document_rejects_undeclared_successors() {
    let doc = MapDocument::from_json(r#"{"root":"a","nodes":[{"id":"a","next":["ghost"]}]}"#)
        .unwrap();
    let err = doc.to_map().unwrap_err();
    assert!(matches!(
        err,
        Error::MissingNode { ref from, ref id } if from == "a" && id == "ghost"
    ));
}

#[test]
fn document_reports_malformed_json() {
    assert!(matches!(
        MapDocument::from_json("{\"root\": 1}"),
        Err(Error::Json(_))
    ));
}

#[test]
fn document_captures_an_existing_map() {
    let doc = MapDocument::from_json(DIAMOND).unwrap();
    let map = doc.to_map().unwrap();
    assert_eq!(MapDocument::from_map(&map, "start"), doc);
}

#[test]
fn layout_json_runs_the_selected_engine() {
    let out = layout_json(DIAMOND, Algorithm::default()).unwrap();
    assert_eq!(out.ids(), vec!["start", "left", "end", "right"]);
    assert_eq!(out.node("end").unwrap().parents, vec!["left", "right"]);

    let json = serde_json::to_value(&out).unwrap();
    assert_eq!(json["nodes"][0]["id"], "start");
    assert_eq!(json["nodes"][0]["depth"], 0);
    assert!(json["nodes"][0].get("width").is_none());
    assert_eq!(
        json["nodes"][2]["edges"][0][0],
        serde_json::json!({ "depth": 1, "offset": 0 })
    );
}
