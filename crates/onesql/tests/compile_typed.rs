use onesql::{
    expr::{Expr, Type},
    query::Query,
    schema::{MappingProvider, RecordId, Schema},
    stmt::Value,
    Compiler, ItemReader,
};
use pretty_assertions::assert_eq;

struct Fixture {
    schema: Schema,
    goods: RecordId,
    counterparty: RecordId,
}

impl Fixture {
    fn new() -> Self {
        let mut builder = Schema::builder();

        let counterparty = builder
            .record("Counterparty", "Catalog.Counterparties")
            .field("name", Type::String, "Name")
            .field("code", Type::String, "Code")
            .id();

        let goods = builder
            .record("Goods", "Catalog.Goods")
            .field("name", Type::String, "Name")
            .field("price", Type::Decimal, "Price")
            .field("qty", Type::I32, "Quantity")
            .field("active", Type::Bool, "Active")
            .field("supplier", counterparty, "Supplier")
            .field("extra", Type::Object, "Extra")
            .unmapped("cached", Type::String)
            .id();

        Self {
            schema: builder.build(),
            goods,
            counterparty,
        }
    }

    fn compiler(&self) -> Compiler {
        Compiler::new(self.schema.clone())
    }

    fn goods(&self, name: &str) -> Expr {
        self.member(Expr::record(self.goods), self.goods, name)
    }

    fn member(&self, base: Expr, record: RecordId, name: &str) -> Expr {
        Expr::member(base, self.schema.member(record, name).unwrap())
    }

    fn condition(&self, predicate: Expr) -> String {
        self.compiler().compile_condition(&predicate).unwrap().text
    }
}

#[test]
fn schema_lookups() {
    let f = Fixture::new();

    assert_eq!(f.schema.records().len(), 2);
    assert_eq!(f.schema.table_name(f.goods), Some("Catalog.Goods"));
    assert_eq!(f.schema.record_by_name("Counterparty").unwrap().id, f.counterparty);
    assert!(f.schema.is_record_type(&Type::Record(f.goods)));
    assert!(!f.schema.is_record_type(&Type::Record(RecordId(7))));
    assert!(!f.schema.is_record_type(&Type::String));

    let cached = f.schema.member(f.goods, "cached").unwrap();
    assert_eq!(cached.field_name, None);
}

#[test]
fn mapped_member() {
    let f = Fixture::new();
    assert_eq!(f.condition(Expr::gt(f.goods("qty"), 5)), "Quantity > &p1");
}

#[test]
fn query_over_record_type() {
    let f = Fixture::new();

    let query = Query::from_record(f.goods)
        .filter(Expr::eq(f.goods("active"), true))
        .order_by(f.goods("name"))
        .select(Expr::new_anonymous([
            ("name", f.goods("name")),
            ("price", f.goods("price")),
        ]));

    let compiled = f.compiler().compile(&query).unwrap();

    assert_eq!(
        compiled.command.text,
        "SELECT Name, Price FROM Catalog.Goods WHERE Active = &p1 ORDER BY Name"
    );
    assert_eq!(compiled.command.param("p1"), Some(&Value::Bool(true)));
    assert!(matches!(compiled.reader, Some(ItemReader::Record(ref columns)) if columns.len() == 2));
}

#[test]
fn unmapped_record_source() {
    let f = Fixture::new();

    let err = f
        .compiler()
        .compile(&Query::from_record(RecordId(42)))
        .unwrap_err();

    assert!(err.is_unsupported_expression());
}

#[test]
fn navigation_through_reference() {
    let f = Fixture::new();

    let supplier = f.goods("supplier");
    let name = f.member(supplier, f.counterparty, "name");

    assert_eq!(f.condition(Expr::eq(name, "ACME")), "Supplier.Name = &p1");
}

#[test]
fn reference_compared_with_null() {
    let f = Fixture::new();
    assert_eq!(
        f.condition(Expr::eq(f.goods("supplier"), Expr::null())),
        "Supplier IS NULL"
    );
}

#[test]
fn conversion_to_record_type() {
    let f = Fixture::new();

    let extra = Expr::convert(f.goods("extra"), f.counterparty);
    let name = f.member(extra, f.counterparty, "name");

    assert_eq!(
        f.condition(Expr::eq(name, "ACME")),
        "CAST(Extra AS Catalog.Counterparties).Name = &p1"
    );
}

#[test]
fn to_record_call() {
    let f = Fixture::new();

    let extra = Expr::to_record(f.goods("extra"), f.counterparty);
    let code = f.member(extra, f.counterparty, "code");

    assert_eq!(
        f.condition(Expr::eq(code, "001")),
        "CAST(Extra AS Catalog.Counterparties).Code = &p1"
    );
}

#[test]
fn type_test() {
    let f = Fixture::new();

    let command = f
        .compiler()
        .compile_condition(&Expr::type_is(f.goods("extra"), f.counterparty))
        .unwrap();

    assert_eq!(command.text, "Extra REFS Catalog.Counterparties");
    assert!(command.params.is_empty());
}

#[test]
fn unmapped_member() {
    let f = Fixture::new();

    let err = f
        .compiler()
        .compile_condition(&Expr::eq(f.goods("cached"), "x"))
        .unwrap_err();

    assert!(err.is_unknown_field_mapping());
}

#[test]
fn member_of_unknown_record() {
    let f = Fixture::new();

    // The compiler's mapping only knows an unrelated record
    let mut builder = Schema::builder();
    builder.record("Empty", "Catalog.Empty");
    let compiler = Compiler::new(builder.build());

    let err = compiler
        .compile_condition(&Expr::eq(f.goods("qty"), 1))
        .unwrap_err();

    assert!(err.is_unknown_field_mapping());
}

#[test]
fn whole_record_is_not_a_value() {
    let f = Fixture::new();
    let compiler = f.compiler();

    let err = compiler
        .compile_condition(&Expr::eq(Expr::record(f.goods), Expr::null()))
        .unwrap_err();
    assert!(err.is_invalid_record_usage());

    let query = Query::from_record(f.goods).select(f.goods("supplier"));
    let err = compiler.compile(&query).unwrap_err();
    assert!(err.is_invalid_record_usage());

    let query = Query::from_record(f.goods).select(Expr::new_anonymous([
        ("name", f.goods("name")),
        ("supplier", f.goods("supplier")),
    ]));
    let err = compiler.compile(&query).unwrap_err();
    assert!(err.is_invalid_record_usage());

    let query = Query::from_record(f.goods).select(Expr::record(f.goods));
    let err = compiler.compile(&query).unwrap_err();
    assert!(err.is_invalid_record_usage());
}

#[test]
fn declared_record_projection() {
    let f = Fixture::new();

    let query = Query::from_record(f.goods).select(Expr::new_declared(
        f.counterparty,
        [("name", f.goods("name"))],
    ));

    let compiled = f.compiler().compile(&query).unwrap();
    assert_eq!(compiled.command.text, "SELECT Name FROM Catalog.Goods");
}

#[test]
fn empty_projection_is_rejected() {
    let f = Fixture::new();

    let members: [(&str, Expr); 0] = [];
    let query = Query::from_record(f.goods).select(Expr::new_anonymous(members));

    let err = f.compiler().compile(&query).unwrap_err();
    assert!(err.is_invalid_statement());
}
