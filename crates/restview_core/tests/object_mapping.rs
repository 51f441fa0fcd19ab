use restview_core::{
    AggregatorHandle, DmError, EventStore, Layout, Link, Member, MemberKind, ObjectDM, Property,
    ResourceProxy, ResultObject, ResultRepresentation, TransportError,
};
use serde_json::{json, Value};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

struct NullProxy;

impl ResourceProxy for NullProxy {
    fn fetch(&self, _link: &Link, _aggregator: &AggregatorHandle) -> Result<(), TransportError> {
        Ok(())
    }
}

struct CapturingLayout {
    captured: Rc<RefCell<Vec<(Property, AggregatorHandle, String)>>>,
}

impl Layout for CapturingLayout {
    fn add_object_property(
        &mut self,
        property: Property,
        aggregator: &AggregatorHandle,
        referrer: &str,
    ) {
        self.captured
            .borrow_mut()
            .push((property, aggregator.clone(), referrer.to_string()));
    }

    fn ready_to_render(&self) -> bool {
        true
    }
}

fn member(id: &str, kind: MemberKind, value: Value) -> Member {
    Member {
        id: id.to_string(),
        kind,
        links: vec![Link::read(format!("http://srv/objects/7/{id}"))],
        optional: id.len() % 2 == 0,
        value: Some(value),
        extensions: json!({"friendlyName": id}),
        format: Some("string".to_string()),
        disabled_reason: None,
    }
}

fn result_payload() -> ResultObject {
    let mut members = BTreeMap::new();
    members.insert(
        "firstName".to_string(),
        member("firstName", MemberKind::Property, json!("Ada")),
    );
    members.insert(
        "lastName".to_string(),
        member("lastName", MemberKind::Property, json!("Lovelace")),
    );
    members.insert(
        "notes".to_string(),
        member("notes", MemberKind::Collection, json!([])),
    );
    members.insert(
        "archive".to_string(),
        member("archive", MemberKind::Action, Value::Null),
    );

    ResultObject {
        result: ResultRepresentation {
            links: vec![Link::read("http://srv/objects/7")],
            extensions: json!({"oid": "demo.Person:7"}),
            title: "Ada Lovelace".to_string(),
            domain_type: "demo.Person".to_string(),
            instance_id: 7,
            members,
        },
    }
}

fn bare_dm() -> ObjectDM {
    ObjectDM::new(
        "mapping",
        None,
        Rc::new(RefCell::new(EventStore::new())),
        Rc::new(NullProxy),
    )
}

#[test]
fn add_result_then_object_round_trips_the_payload() {
    let payload = result_payload();
    let expected = payload.result.clone();

    let mut dm = bare_dm();
    dm.add_result(payload).unwrap();

    let object = dm.object().unwrap();
    assert_eq!(object.links, expected.links);
    assert_eq!(object.extensions, expected.extensions);
    assert_eq!(object.title, expected.title);
    assert_eq!(object.domain_type, expected.domain_type);
    assert_eq!(object.instance_id, expected.instance_id.to_string());
    assert_eq!(object.members, expected.members);
}

#[test]
fn add_result_with_layout_attached_is_missing_correlation() {
    let captured = Rc::new(RefCell::new(Vec::new()));
    let mut dm = ObjectDM::new(
        "mapping",
        Some(Box::new(CapturingLayout {
            captured: captured.clone(),
        })),
        Rc::new(RefCell::new(EventStore::new())),
        Rc::new(NullProxy),
    );

    let err = dm.add_result(result_payload()).unwrap_err();
    assert!(matches!(err, DmError::MissingCorrelation(_)));
    assert!(captured.borrow().is_empty());
    // the snapshot itself was stored before projection failed
    assert!(dm.object().is_ok());
}

#[test]
fn add_data_projects_only_property_members_with_provenance_tags() {
    let captured = Rc::new(RefCell::new(Vec::new()));
    let mut dm = ObjectDM::new(
        "mapping",
        Some(Box::new(CapturingLayout {
            captured: captured.clone(),
        })),
        Rc::new(RefCell::new(EventStore::new())),
        Rc::new(NullProxy),
    );

    let aggregator = AggregatorHandle::new();
    let payload = result_payload();
    let obj = restview_core::TObject::from_result(payload);
    dm.add_data(obj, Some(&aggregator), Some("http://srv/objects"))
        .unwrap();

    let captured = captured.borrow();
    let ids: Vec<&str> = captured.iter().map(|(p, _, _)| p.id.as_str()).collect();
    assert_eq!(ids, vec!["firstName", "lastName"]);
    for (property, tag, referrer) in captured.iter() {
        assert_eq!(property.title, property.id);
        assert_eq!(tag, &aggregator);
        assert_eq!(referrer, "http://srv/objects");
    }
}

#[test]
fn add_data_without_referrer_is_missing_correlation() {
    let captured = Rc::new(RefCell::new(Vec::new()));
    let mut dm = ObjectDM::new(
        "mapping",
        Some(Box::new(CapturingLayout { captured })),
        Rc::new(RefCell::new(EventStore::new())),
        Rc::new(NullProxy),
    );

    let aggregator = AggregatorHandle::new();
    let obj = restview_core::TObject::from_result(result_payload());
    let err = dm.add_data(obj, Some(&aggregator), None).unwrap_err();
    assert!(matches!(err, DmError::MissingCorrelation(_)));
}

#[test]
fn projection_preserves_member_fields_verbatim() {
    let payload = result_payload();
    let source = payload.result.members.get("firstName").unwrap().clone();

    let property = Property::from_member(&source);
    assert_eq!(property.id, source.id);
    assert_eq!(property.kind, source.kind);
    assert_eq!(property.links, source.links);
    assert_eq!(property.optional, source.optional);
    assert_eq!(property.title, source.id);
    assert_eq!(property.value, source.value);
    assert_eq!(property.extensions, source.extensions);
    assert_eq!(property.format, source.format);
    assert_eq!(property.disabled_reason, source.disabled_reason);
}
