use onesql_core::stmt::Ident;
use std::collections::HashSet;

#[test]
fn case_insensitive_equality() {
    assert_eq!(Ident::new("Code"), Ident::new("CODE"));
    assert_eq!(Ident::new("Наименование"), Ident::new("НАИМЕНОВАНИЕ"));
    assert_ne!(Ident::new("Code"), Ident::new("Codes"));

    assert!(Ident::new("Дата") == "дата");
}

#[test]
fn hash_agrees_with_equality() {
    let mut set = HashSet::new();
    set.insert(Ident::new("Ссылка"));

    assert!(set.contains(&Ident::new("ССЫЛКА")));
    assert!(!set.insert(Ident::new("ссылка")));
    assert!(set.insert(Ident::new("Ссылка2")));
}

#[test]
fn original_spelling_is_kept() {
    let ident = Ident::new("ТестовоеПоле");

    assert_eq!(ident.as_str(), "ТестовоеПоле");
    assert_eq!(ident.to_string(), "ТестовоеПоле");
}
