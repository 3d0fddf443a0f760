//! DOM binding tests (run with `wasm-pack test --headless --chrome`).
//!
//! Covers what `MemoryView` cannot: class toggling on real elements,
//! serialization of live controls, and cancellation of the native submit.

#![cfg(target_arch = "wasm32")]

use graw_config_pages::{
	BannerPresenter, DomView, FormConfig, bind_submit_handler, page_config, serialize_form,
};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Event, EventInit, HtmlFormElement};

wasm_bindgen_test_configure!(run_in_browser);

const PAGE: &str = r#"
<div id="alert_box" class="alert hidden"></div>
<form id="config_form">
	<input type="hidden" name="identity" value="tok-123">
	<div id="error_svn_url" class="form-group"><input name="svn_url" value="https://svn.example.org/repo"></div>
	<div id="error_svn_int" class="form-group"><input name="svn_int" type="number" value="120"></div>
	<div id="error_bot_cmd" class="form-group"><input name="bot_cmd" type="checkbox"></div>
	<input name="svn_pw" type="password" value="secret" disabled>
	<select name="bot_chan"><option value="0">none</option><option value="42" selected>general</option></select>
	<textarea name="fmt_msg">line one
line two</textarea>
	<button type="submit" name="apply" value="1">Apply</button>
</form>
"#;

fn document() -> Document {
	web_sys::window().unwrap().document().unwrap()
}

fn load_page() -> Document {
	let document = document();
	document.body().unwrap().set_inner_html(PAGE);
	document
}

fn form(document: &Document) -> HtmlFormElement {
	document
		.get_element_by_id("config_form")
		.unwrap()
		.dyn_into::<HtmlFormElement>()
		.unwrap()
}

fn has_class(document: &Document, id: &str, class: &str) -> bool {
	document.get_element_by_id(id).unwrap().class_list().contains(class)
}

#[wasm_bindgen_test]
fn test_serialize_form_successful_controls() {
	let document = load_page();

	let submission = serialize_form(&form(&document));

	assert_eq!(
		submission.encode().unwrap(),
		"identity=tok-123&svn_url=https%3A%2F%2Fsvn.example.org%2Frepo&svn_int=120&bot_chan=42&fmt_msg=line+one%0D%0Aline+two"
	);
}

#[wasm_bindgen_test]
fn test_dom_view_renders_error_then_success() {
	let document = load_page();
	let window = web_sys::window().unwrap();
	let presenter = BannerPresenter::new(DomView::new(window.clone(), document.clone(), FormConfig::default()));

	presenter.set_status("error", "<strong>Unable to apply changes.</strong>", ["svn_url", "svn_int"]);

	assert!(has_class(&document, "alert_box", "alert-danger"));
	assert!(!has_class(&document, "alert_box", "hidden"));
	assert!(has_class(&document, "error_svn_url", "has-error"));
	assert!(has_class(&document, "error_svn_int", "has-error"));
	assert!(!has_class(&document, "error_bot_cmd", "has-error"));
	let banner = document.get_element_by_id("alert_box").unwrap();
	assert_eq!(banner.inner_html(), "<strong>Unable to apply changes.</strong>");
	assert_eq!(window.location().hash().unwrap(), "#alert_box");

	presenter.reset();
	assert!(has_class(&document, "alert_box", "hidden"));

	presenter.set_status("success", "Saved.", Vec::<String>::new());

	assert!(has_class(&document, "alert_box", "alert-success"));
	assert!(!has_class(&document, "alert_box", "alert-danger"));
	assert!(!has_class(&document, "error_svn_url", "has-error"));
	assert!(!has_class(&document, "error_svn_int", "has-error"));
	// classes outside the managed set are left alone
	assert!(has_class(&document, "alert_box", "alert"));
}

#[wasm_bindgen_test]
fn test_submit_event_default_prevented() {
	let document = load_page();
	bind_submit_handler(FormConfig::default()).unwrap();
	document
		.get_element_by_id("alert_box")
		.unwrap()
		.class_list()
		.remove_1("hidden")
		.unwrap();

	let init = EventInit::new();
	init.set_cancelable(true);
	let event = Event::new_with_event_init_dict("submit", &init).unwrap();
	let not_cancelled = form(&document).dispatch_event(&event).unwrap();

	assert!(!not_cancelled);
	assert!(event.default_prevented());
	assert!(has_class(&document, "alert_box", "hidden"));
}

#[wasm_bindgen_test]
fn test_bind_missing_form() {
	load_page();
	let err = bind_submit_handler(FormConfig::default().with_form_id("nope")).unwrap_err();
	assert_eq!(err.to_string(), "element #nope not found");

	let err = bind_submit_handler(FormConfig::default().with_form_id("alert_box")).unwrap_err();
	assert_eq!(err.to_string(), "element #alert_box is not a form");
}

#[wasm_bindgen_test]
fn test_page_config_reads_settings_block() {
	let document = load_page();
	assert_eq!(page_config(&document).unwrap(), FormConfig::default());

	let body = document.body().unwrap();
	body.insert_adjacent_html(
		"beforeend",
		r#"<script type="application/json" id="config_form_settings">{"endpoint": "/guilds/7/validate"}</script>"#,
	)
	.unwrap();

	assert_eq!(page_config(&document).unwrap().endpoint, "/guilds/7/validate");
}
