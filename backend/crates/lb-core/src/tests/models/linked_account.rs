use crate::{LinkedAccount, User};

#[test]
fn test_linked_account_is_link_of_matches_pair_only() {
    let account = LinkedAccount::new(1, 7, "ext-1".into(), "a@x.com".into(), "A".into());

    assert!(account.is_link_of(7, "ext-1"));
    assert!(!account.is_link_of(8, "ext-1"));
    assert!(!account.is_link_of(7, "ext-2"));
}

#[test]
fn test_user_serializes_with_persisted_field_names() {
    let user = User::new(3, "a@x.com".into(), "A".into());
    let json = serde_json::to_value(&user).unwrap();

    assert_eq!(json["id"], 3);
    assert_eq!(json["email"], "a@x.com");
    assert_eq!(json["name"], "A");
    assert!(json["created"].is_string());
}

#[test]
fn test_linked_account_serializes_with_persisted_field_names() {
    let account = LinkedAccount::new(2, 3, "ext-9".into(), "a@x.com".into(), "A".into());
    let json = serde_json::to_value(&account).unwrap();

    assert_eq!(json["id"], 2);
    assert_eq!(json["user_id"], 3);
    assert_eq!(json["account_id"], "ext-9");
    assert!(json["created"].is_string());
}
