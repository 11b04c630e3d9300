//! End-to-end behavior of `#[screen_params]` dispatchers.

#![allow(non_snake_case)]

use std::collections::HashSet;

use paramflow_core::{Context, Overlay, Screen, Subview, UNDEFINED_REQUEST_CODE};
use paramflow_macros::screen_params;

#[screen_params(
    field(name = "user_id", ty = "u64", doc = "record id of the profile owner"),
    field(name = "tab", ty = "String", default = "overview"),
    field(name = "sections", ty = "String", kind = "set"),
)]
struct ProfileScreen;

#[screen_params]
struct BlankScreen;

#[screen_params(field(name = "tab", ty = "std::string::String", default = "overview"))]
struct QualifiedScreen;

#[screen_params(field(name = "ratings", ty = "i32", kind = "array"))]
struct GalleryScreen;

struct Host {
    ctx: Context,
}

impl Host {
    fn new() -> Self {
        Self {
            ctx: Context::new(),
        }
    }
}

impl Screen for Host {
    fn context(&self) -> &Context {
        &self.ctx
    }
}

struct Pane<'a> {
    host: &'a Host,
}

impl Subview for Pane<'_> {
    fn screen(&self) -> &dyn Screen {
        self.host
    }
}

struct Sheet<'a> {
    host: &'a Host,
}

impl Overlay for Sheet<'_> {
    fn screen(&self) -> &dyn Screen {
        self.host
    }
}

#[test]
fn TAG___is_derived_from_the_expansion_site() {
    assert_eq!(
        ProfileScreenDispatcher::TAG,
        concat!(module_path!(), "::ProfileScreen")
    );
}

#[test]
fn get_data___no_intent___yields_declared_defaults() {
    let payload = ProfileScreenDispatcher::get_data(None);

    assert_eq!(*payload.user_id(), 0);
    assert_eq!(payload.tab().as_str(), "overview");
    assert!(payload.sections().is_empty());
}

#[test]
fn get_data___intent_without_the_tagged_entry___yields_defaults_too() {
    let ctx = Context::new();
    let intent = ctx.new_intent("somewhere.else");

    let payload = ProfileScreenDispatcher::get_data(Some(&intent));

    assert_eq!(payload, ProfileScreenPayload::default());
}

#[test]
fn create_intent___round_trips_the_configured_payload() {
    let ctx = Context::new();
    let dispatcher = ProfileScreenDispatcher::create()
        .set_user_id(42)
        .set_tab("posts".to_string())
        .set_sections(HashSet::from(["bio".to_string(), "feed".to_string()]));

    let intent = dispatcher.create_intent(&ctx);

    assert_eq!(intent.target(), ProfileScreenDispatcher::TAG);
    let payload = ProfileScreenDispatcher::get_data(Some(&intent));
    assert_eq!(*payload.user_id(), 42);
    assert_eq!(payload.tab().as_str(), "posts");
    assert_eq!(payload.sections().len(), 2);
}

#[test]
fn start___records_a_launch_with_the_sentinel_request_code() {
    let host = Host::new();

    ProfileScreenDispatcher::create().start(&host);

    assert_eq!(host.ctx.launch_count(), 1);
    let launch = host.ctx.last_launch().unwrap();
    assert_eq!(launch.request_code, UNDEFINED_REQUEST_CODE);
    assert_eq!(launch.intent.target(), ProfileScreenDispatcher::TAG);
}

#[test]
fn start___with_request_code___carries_it_into_the_launch() {
    let host = Host::new();

    ProfileScreenDispatcher::create().request_code(7).start(&host);

    assert_eq!(host.ctx.last_launch().unwrap().request_code, 7);
}

#[test]
fn start___returns_the_dispatcher___so_it_can_be_relaunched() {
    let host = Host::new();

    let dispatcher = ProfileScreenDispatcher::create().set_user_id(1).start(&host);
    dispatcher.start(&host);

    assert_eq!(host.ctx.launch_count(), 2);
    let launches = host.ctx.take_launches();
    assert_eq!(launches[0].intent, launches[1].intent);
}

#[test]
fn start_from_subview___routes_through_the_enclosing_screen() {
    let host = Host::new();
    let pane = Pane { host: &host };

    ProfileScreenDispatcher::create().start_from_subview(&pane);

    assert_eq!(host.ctx.launch_count(), 1);
}

#[test]
fn start_from_overlay___routes_through_the_anchoring_screen() {
    let host = Host::new();
    let sheet = Sheet { host: &host };

    ProfileScreenDispatcher::create().start_from_overlay(&sheet);

    assert_eq!(host.ctx.launch_count(), 1);
}

#[test]
fn array_field___round_trips_as_a_boxed_slice() {
    let ctx = Context::new();
    let intent = GalleryScreenDispatcher::create()
        .set_ratings(vec![3, 5, 4].into_boxed_slice())
        .create_intent(&ctx);

    let payload = GalleryScreenDispatcher::get_data(Some(&intent));
    assert_eq!(payload.ratings().as_ref(), &[3, 5, 4][..]);
}

#[test]
fn array_field___defaults_to_an_empty_slice() {
    let payload = GalleryScreenDispatcher::get_data(None);

    assert!(payload.ratings().is_empty());
}

#[test]
fn qualified_string_field___keeps_its_declared_default() {
    let payload = QualifiedScreenDispatcher::get_data(None);

    assert_eq!(payload.tab().as_str(), "overview");
}

#[test]
fn create_intent___serializes_for_out_of_process_transport() {
    let ctx = Context::new();
    let intent = ProfileScreenDispatcher::create()
        .set_user_id(3)
        .create_intent(&ctx);

    let encoded = serde_json::to_string(&intent).unwrap();
    let decoded: paramflow_core::Intent = serde_json::from_str(&encoded).unwrap();

    assert_eq!(decoded, intent);
    assert_eq!(*ProfileScreenDispatcher::get_data(Some(&decoded)).user_id(), 3);
}

#[test]
fn field_less_screen___keeps_the_full_dispatcher_surface() {
    let ctx = Context::new();

    let intent = BlankScreenDispatcher::create().create_intent(&ctx);

    assert!(intent.extras().contains(BlankScreenDispatcher::TAG));
    let payload = BlankScreenDispatcher::get_data(Some(&intent));
    assert_eq!(payload, BlankScreenPayload::default());
}
