//! Rendering surface for validation results.
//!
//! [`FormView`] is the narrow set of page mutations the presenter needs.
//! [`DomView`](crate::dom::DomView) drives the live document on `wasm32`;
//! [`MemoryView`] keeps the same state in plain collections so presenter
//! and handler behaviour can be checked without a browser.

use crate::config::FormConfig;
use crate::plan::BannerVariant;
use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};

/// Page mutations used to render a validation outcome.
pub trait FormView {
	/// Adds the hidden class to the banner.
	fn hide_banner(&self);

	/// Removes the invalid class from every element currently carrying it.
	fn clear_field_markers(&self);

	/// Removes the hidden class and every variant class from the banner.
	fn reset_banner(&self);

	/// Replaces the banner's inner markup.
	fn set_banner_content(&self, html: &str);

	fn add_banner_variant(&self, variant: BannerVariant);

	/// Adds the invalid class to the error element of `field`, if the page has one.
	fn mark_field(&self, field: &str);

	/// Scrolls the banner into view by navigating to its fragment.
	fn reveal_banner(&self);
}

/// Class name for `variant` under `config`.
pub fn variant_class(config: &FormConfig, variant: BannerVariant) -> &str {
	match variant {
		BannerVariant::Success => &config.classes.success,
		BannerVariant::Warning => &config.classes.warning,
		BannerVariant::Danger => &config.classes.danger,
	}
}

/// In-memory page model: element ids mapped to their class lists.
///
/// Only the banner and the field-error elements registered through
/// [`MemoryView::with_fields`] exist; marking any other field does nothing,
/// as a missing element would in the browser.
#[derive(Debug)]
pub struct MemoryView {
	config: FormConfig,
	classes: RefCell<BTreeMap<String, BTreeSet<String>>>,
	banner_html: RefCell<String>,
	fragment: RefCell<Option<String>>,
}

impl MemoryView {
	/// A page with just the banner, initially hidden.
	pub fn new(config: FormConfig) -> Self {
		let mut classes = BTreeMap::new();
		classes.insert(
			config.banner_id.clone(),
			BTreeSet::from([config.classes.hidden.clone()]),
		);
		Self {
			config,
			classes: RefCell::new(classes),
			banner_html: RefCell::new(String::new()),
			fragment: RefCell::new(None),
		}
	}

	/// Registers an error element for each field name.
	pub fn with_fields<I, S>(self, fields: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		{
			let mut classes = self.classes.borrow_mut();
			for field in fields {
				classes
					.entry(self.config.field_marker_id(field.as_ref()))
					.or_default();
			}
		}
		self
	}

	pub fn config(&self) -> &FormConfig {
		&self.config
	}

	/// Classes on the element with `id`, or `None` if no such element.
	pub fn classes_of(&self, id: &str) -> Option<BTreeSet<String>> {
		self.classes.borrow().get(id).cloned()
	}

	pub fn banner_classes(&self) -> BTreeSet<String> {
		self.classes_of(&self.config.banner_id).unwrap_or_default()
	}

	pub fn banner_html(&self) -> String {
		self.banner_html.borrow().clone()
	}

	pub fn is_banner_hidden(&self) -> bool {
		self.banner_classes().contains(&self.config.classes.hidden)
	}

	/// Fields whose error element carries the invalid class, sorted.
	pub fn marked_fields(&self) -> Vec<String> {
		let prefix = &self.config.field_error_prefix;
		self.classes
			.borrow()
			.iter()
			.filter(|(_, set)| set.contains(&self.config.classes.invalid))
			.filter_map(|(id, _)| id.strip_prefix(prefix.as_str()).map(str::to_string))
			.collect()
	}

	pub fn is_marked(&self, field: &str) -> bool {
		self.classes_of(&self.config.field_marker_id(field))
			.is_some_and(|set| set.contains(&self.config.classes.invalid))
	}

	/// Current location fragment, without the leading `#`.
	pub fn fragment(&self) -> Option<String> {
		self.fragment.borrow().clone()
	}

	fn with_banner<F: FnOnce(&mut BTreeSet<String>)>(&self, f: F) {
		let mut classes = self.classes.borrow_mut();
		f(classes.entry(self.config.banner_id.clone()).or_default());
	}
}

impl Default for MemoryView {
	fn default() -> Self {
		Self::new(FormConfig::default())
	}
}

impl FormView for MemoryView {
	fn hide_banner(&self) {
		let hidden = self.config.classes.hidden.clone();
		self.with_banner(|set| {
			set.insert(hidden);
		});
	}

	fn clear_field_markers(&self) {
		let invalid = &self.config.classes.invalid;
		for set in self.classes.borrow_mut().values_mut() {
			set.remove(invalid);
		}
	}

	fn reset_banner(&self) {
		let resettable = self.config.classes.resettable();
		self.with_banner(|set| {
			for class in resettable {
				set.remove(class);
			}
		});
	}

	fn set_banner_content(&self, html: &str) {
		*self.banner_html.borrow_mut() = html.to_string();
	}

	fn add_banner_variant(&self, variant: BannerVariant) {
		let class = variant_class(&self.config, variant).to_string();
		self.with_banner(|set| {
			set.insert(class);
		});
	}

	fn mark_field(&self, field: &str) {
		let id = self.config.field_marker_id(field);
		if let Some(set) = self.classes.borrow_mut().get_mut(&id) {
			set.insert(self.config.classes.invalid.clone());
		}
	}

	fn reveal_banner(&self) {
		*self.fragment.borrow_mut() = Some(self.config.banner_id.clone());
	}
}
