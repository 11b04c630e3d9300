#![allow(non_snake_case)]

use super::*;
use crate::model::{ParentTarget, TargetRole};

fn ident(name: &str) -> Ident {
    syn::parse_str(name).unwrap()
}

fn ty(source: &str) -> Type {
    syn::parse_str(source).unwrap()
}

fn field(name: &str, value_ty: &str) -> FieldData {
    FieldData::new(ident(name), ty(value_ty))
}

fn render_items(tokens: TokenStream) -> String {
    let file: syn::File = syn::parse2(tokens).unwrap();
    prettyplease::unparse(&file)
}

// resolved_ty

#[test]
fn resolved_ty___container_kinds___wrap_the_value_type() {
    let resolved = |kind| resolved_ty(&field("n", "i32").with_container(kind)).to_string();

    assert_eq!(resolved(ContainerKind::Scalar), quote!(i32).to_string());
    assert_eq!(
        resolved(ContainerKind::Array),
        quote!(::std::boxed::Box<[i32]>).to_string()
    );
    assert_eq!(
        resolved(ContainerKind::List),
        quote!(::std::vec::Vec<i32>).to_string()
    );
    assert_eq!(
        resolved(ContainerKind::Set),
        quote!(::std::collections::HashSet<i32>).to_string()
    );
}

// default_initializer policy

#[test]
fn default_initializer___no_default___falls_back_to_default_trait() {
    let field = field("id", "i32");

    let init = default_initializer(&field).unwrap();

    assert_eq!(
        init.to_string(),
        quote!(::core::default::Default::default()).to_string()
    );
}

#[test]
fn default_initializer___scalar_text___is_quoted_and_owned() {
    let field = field("label", "String").with_default("hello");

    let init = default_initializer(&field).unwrap();

    assert_eq!(
        init.to_string(),
        quote!(::std::string::String::from("hello")).to_string()
    );
}

#[test]
fn default_initializer___qualified_string_spelling___is_still_quoted() {
    for spelling in ["std::string::String", "::std::string::String", "string::String"] {
        let field = field("tab", spelling).with_default("overview");

        let init = default_initializer(&field).unwrap();

        assert_eq!(
            init.to_string(),
            quote!(::std::string::String::from("overview")).to_string()
        );
    }
}

#[test]
fn default_initializer___generic_type_ending_in_string___is_not_text() {
    let field = field("wrapped", "Tagged<String>").with_default("Tagged::default()");

    let init = default_initializer(&field).unwrap();

    assert_eq!(init.to_string(), quote!(Tagged::default()).to_string());
}

#[test]
fn default_initializer___scalar_number___is_spliced_verbatim() {
    let field = field("id", "i32").with_default("7");

    let init = default_initializer(&field).unwrap();

    assert_eq!(init.to_string(), "7");
}

#[test]
fn default_initializer___list_of_text___is_an_expression_not_a_literal() {
    // container kinds opt out of the text category even for String
    let field = field("tags", "String")
        .with_container(ContainerKind::List)
        .with_default("vec![]");

    let init = default_initializer(&field).unwrap();

    assert_eq!(init.to_string(), quote!(vec![]).to_string());
}

#[test]
fn default_initializer___malformed_literal___reports_invalid_default() {
    let field = field("id", "i32").with_default("7 +");

    let err = default_initializer(&field).unwrap_err();

    assert!(matches!(
        err,
        GenerateError::InvalidDefault { ref field, ref literal, .. }
            if field == "id" && literal == "7 +"
    ));
}

// payload synthesis

fn screen_target(name: &str, fields: Vec<FieldData>) -> ParsedTarget {
    let mut target = ParsedTarget::new(ident(name), TargetRole::Screen);
    target.fields = fields;
    target
}

#[test]
fn payload_struct___two_fields___emits_field_getter_setter_per_entry() {
    let target = screen_target(
        "Foo",
        vec![
            field("id", "i32").with_default("7").with_doc("record id"),
            field("name", "String"),
        ],
    );
    let base = BaseGenerator::new(&target);

    let rendered = render_items(base.payload_struct().unwrap());

    assert!(rendered.contains("pub struct FooPayload"));
    assert_eq!(rendered.matches("pub fn id(").count(), 1);
    assert_eq!(rendered.matches("pub fn set_id(").count(), 1);
    assert_eq!(rendered.matches("pub fn name(").count(), 1);
    assert_eq!(rendered.matches("pub fn set_name(").count(), 1);
    assert!(rendered.contains("record id"));
}

#[test]
fn payload_struct___default_impl___uses_declared_literals() {
    let target = screen_target("Foo", vec![field("id", "i32").with_default("7")]);
    let base = BaseGenerator::new(&target);

    let rendered = render_items(base.payload_struct().unwrap());

    assert!(rendered.contains("impl ::core::default::Default for FooPayload"));
    assert!(rendered.contains("id: 7"));
}

#[test]
fn payload_struct___derives___cover_serde_and_comparison() {
    let target = screen_target("Foo", vec![field("id", "i32")]);
    let base = BaseGenerator::new(&target);

    let rendered = render_items(base.payload_struct().unwrap());

    assert!(rendered.contains("::serde::Serialize"));
    assert!(rendered.contains("::serde::Deserialize"));
    assert!(rendered.contains("PartialEq"));
}

#[test]
fn payload_struct___empty_field_list___still_emits_the_type() {
    let target = screen_target("Foo", Vec::new());
    let base = BaseGenerator::new(&target);

    let rendered = render_items(base.payload_struct().unwrap());

    assert!(rendered.contains("pub struct FooPayload"));
}

// fluent chain synthesis

fn wrap_impl(methods: TokenStream) -> String {
    render_items(quote! {
        impl Dummy {
            #methods
        }
    })
}

#[test]
fn set_methods___own_fields___delegate_into_the_payload() {
    let target = screen_target("Foo", vec![field("id", "i32")]);
    let base = BaseGenerator::new(&target);

    let rendered = wrap_impl(base.set_methods());

    assert!(rendered.contains("self.payload.set_id(id)"));
}

#[test]
fn set_methods___parent_fields___delegate_into_the_parent_artifact() {
    let mut target = screen_target("Foo", vec![field("id", "i32")]);
    target.parent = Some(ParentTarget {
        name: ident("Session"),
        fields: vec![field("token", "String")],
    });
    let base = BaseGenerator::new(&target);

    let rendered = wrap_impl(base.set_methods());

    assert!(rendered.contains("self.parent = self.parent.set_token(token)"));
}

#[test]
fn set_methods___name_collision___own_field_shadows_parent() {
    let mut target = screen_target("Foo", vec![field("id", "i32")]);
    target.parent = Some(ParentTarget {
        name: ident("Session"),
        fields: vec![field("id", "i32"), field("token", "String")],
    });
    let base = BaseGenerator::new(&target);

    let rendered = wrap_impl(base.set_methods());

    assert_eq!(rendered.matches("pub fn set_id(").count(), 1);
    assert!(rendered.contains("self.payload.set_id(id)"));
    assert!(!rendered.contains("self.parent = self.parent.set_id"));
}

// construction

#[test]
fn private_constructor___with_parent___materializes_the_chain_eagerly() {
    let mut target = screen_target("Foo", vec![field("id", "i32")]);
    target.parent = Some(ParentTarget {
        name: ident("Session"),
        fields: Vec::new(),
    });
    let base = BaseGenerator::new(&target);

    let rendered = wrap_impl(base.private_constructor(true, TokenStream::new()));

    assert!(rendered.contains("parent: SessionDispatcher::create()"));
}

#[test]
fn private_constructor___is_not_public() {
    let target = screen_target("Foo", Vec::new());
    let base = BaseGenerator::new(&target);

    let rendered = wrap_impl(base.private_constructor(true, TokenStream::new()));

    assert!(rendered.contains("fn new()"));
    assert!(!rendered.contains("pub fn new()"));
}

#[test]
fn tag_const___derives_from_module_path_and_target_name() {
    let target = screen_target("Foo", Vec::new());
    let base = BaseGenerator::new(&target);

    let rendered = wrap_impl(base.tag_const());

    assert!(rendered.contains("module_path!()"));
    assert!(rendered.contains("\"Foo\""));
}

#[test]
fn BaseGenerator___names___carry_the_role_suffix() {
    let mut target = screen_target("Foo", Vec::new());
    target.parent = Some(ParentTarget {
        name: ident("Session"),
        fields: Vec::new(),
    });
    let base = BaseGenerator::new(&target);

    assert_eq!(base.artifact().to_string(), "FooDispatcher");
    assert_eq!(base.payload().to_string(), "FooPayload");
    assert_eq!(base.parent_artifact().unwrap().to_string(), "SessionDispatcher");
}
