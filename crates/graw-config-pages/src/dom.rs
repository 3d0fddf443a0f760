//! Browser bindings (wasm32 only).
//!
//! [`bind_submit_handler`] wires a [`FormSubmitHandler`] to the page: it
//! looks up the form, installs a `submit` listener that cancels the native
//! submission, and renders through a [`DomView`].

use crate::client::HttpValidationClient;
use crate::config::{FormConfig, SETTINGS_ELEMENT_ID};
use crate::error::{BindError, ConfigError};
use crate::handler::FormSubmitHandler;
use crate::plan::BannerVariant;
use crate::submission::{ControlKind, FormControl, Submission};
use crate::view::{FormView, variant_class};
use crate::{info_log, warn_log};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
	Document, Element, Event, HtmlButtonElement, HtmlFormElement, HtmlInputElement, HtmlOptionElement,
	HtmlSelectElement, HtmlTextAreaElement, Window,
};

/// Handler type installed by [`bind_submit_handler`].
pub type DomSubmitHandler = FormSubmitHandler<DomView, HttpValidationClient>;

/// [`FormView`] over the live document.
///
/// Missing elements are tolerated: the banner or a field's error element
/// simply isn't updated, matching what a selector that matches nothing does.
#[derive(Debug, Clone)]
pub struct DomView {
	window: Window,
	document: Document,
	config: FormConfig,
}

impl DomView {
	pub fn new(window: Window, document: Document, config: FormConfig) -> Self {
		Self {
			window,
			document,
			config,
		}
	}

	fn banner(&self) -> Option<Element> {
		self.document.get_element_by_id(&self.config.banner_id)
	}

	fn add_class(element: &Element, class: &str) {
		if let Err(e) = element.class_list().add_1(class) {
			warn_log!("failed to add class {} to #{}: {:?}", class, element.id(), e);
		}
	}

	fn remove_class(element: &Element, class: &str) {
		if let Err(e) = element.class_list().remove_1(class) {
			warn_log!("failed to remove class {} from #{}: {:?}", class, element.id(), e);
		}
	}
}

impl FormView for DomView {
	fn hide_banner(&self) {
		if let Some(banner) = self.banner() {
			Self::add_class(&banner, &self.config.classes.hidden);
		}
	}

	fn clear_field_markers(&self) {
		// the collection is live; snapshot it before removing the class
		let marked = self
			.document
			.get_elements_by_class_name(&self.config.classes.invalid);
		let elements: Vec<Element> = (0..marked.length()).filter_map(|i| marked.item(i)).collect();
		for element in &elements {
			Self::remove_class(element, &self.config.classes.invalid);
		}
	}

	fn reset_banner(&self) {
		if let Some(banner) = self.banner() {
			for class in self.config.classes.resettable() {
				Self::remove_class(&banner, class);
			}
		}
	}

	fn set_banner_content(&self, html: &str) {
		if let Some(banner) = self.banner() {
			banner.set_inner_html(html);
		}
	}

	fn add_banner_variant(&self, variant: BannerVariant) {
		if let Some(banner) = self.banner() {
			Self::add_class(&banner, variant_class(&self.config, variant));
		}
	}

	fn mark_field(&self, field: &str) {
		let id = self.config.field_marker_id(field);
		if let Some(element) = self.document.get_element_by_id(&id) {
			Self::add_class(&element, &self.config.classes.invalid);
		}
	}

	fn reveal_banner(&self) {
		if let Err(e) = self.window.location().set_hash(&self.config.banner_id) {
			warn_log!("failed to navigate to #{}: {:?}", self.config.banner_id, e);
		}
	}
}

/// Reads the form's controls in document order.
pub fn read_controls(form: &HtmlFormElement) -> Vec<FormControl> {
	let elements = form.elements();
	(0..elements.length())
		.filter_map(|i| elements.item(i))
		.filter_map(|element| read_control(&element))
		.collect()
}

fn read_control(element: &Element) -> Option<FormControl> {
	let name = element.get_attribute("name").unwrap_or_default();
	let disabled = element.matches(":disabled").unwrap_or(false);

	let control = if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
		FormControl::new(name, ControlKind::from_input_type(&input.type_()))
			.with_value(input.value())
			.checked(input.checked())
	} else if let Some(textarea) = element.dyn_ref::<HtmlTextAreaElement>() {
		FormControl::new(name, ControlKind::TextArea).with_value(textarea.value())
	} else if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
		let selected = select.selected_options();
		(0..selected.length())
			.filter_map(|i| selected.item(i))
			.filter_map(|option| option.dyn_into::<HtmlOptionElement>().ok())
			.fold(FormControl::new(name, ControlKind::Select), |control, option| {
				control.with_value(option.value())
			})
	} else if element.is::<HtmlButtonElement>() {
		FormControl::new(name, ControlKind::Submitter)
	} else {
		return None;
	};

	Some(control.disabled(disabled))
}

/// Serializes the form's successful controls.
pub fn serialize_form(form: &HtmlFormElement) -> Submission {
	Submission::from_controls(read_controls(form))
}

/// Reads the page's settings block over the defaults.
///
/// A page without a settings block uses [`FormConfig::default`].
pub fn page_config(document: &Document) -> Result<FormConfig, ConfigError> {
	match document
		.get_element_by_id(SETTINGS_ELEMENT_ID)
		.and_then(|element| element.text_content())
	{
		Some(json) if !json.trim().is_empty() => FormConfig::from_json(&json),
		_ => Ok(FormConfig::default()),
	}
}

/// Installs the submit handler on the form named by `config`.
///
/// The listener lives for the rest of the page; the returned handler is
/// shared with it.
pub fn bind_submit_handler(config: FormConfig) -> Result<Rc<DomSubmitHandler>, BindError> {
	let window = web_sys::window().ok_or(BindError::NoWindow)?;
	let document = window.document().ok_or(BindError::NoDocument)?;

	let form = document
		.get_element_by_id(&config.form_id)
		.ok_or_else(|| BindError::ElementNotFound(config.form_id.clone()))?
		.dyn_into::<HtmlFormElement>()
		.map_err(|_| BindError::NotAForm(config.form_id.clone()))?;

	if document.get_element_by_id(&config.banner_id).is_none() {
		warn_log!("banner #{} not found; results will not be shown", config.banner_id);
	}

	let view = DomView::new(window, document, config.clone());
	let client = HttpValidationClient::new(config.endpoint.clone());
	let handler = Rc::new(FormSubmitHandler::new(view, client, &config));

	let listener_handler = Rc::clone(&handler);
	let listener_form = form.clone();
	let closure = Closure::wrap(Box::new(move |event: Event| {
		event.prevent_default();

		let ticket = listener_handler.begin();
		let submission = serialize_form(&listener_form);

		let handler = Rc::clone(&listener_handler);
		wasm_bindgen_futures::spawn_local(async move {
			handler.dispatch(ticket, submission).await;
		});
	}) as Box<dyn FnMut(_)>);

	form.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref())
		.map_err(|e| BindError::Listener(format!("{:?}", e)))?;

	closure.forget(); // Keep closure alive

	info_log!("validation handler bound to #{} -> {}", config.form_id, config.endpoint);
	Ok(handler)
}
