//! Fixed relation categories for dependency links.
//!
//! The dashboard palette assigns one color per category; the embedded widget
//! receives both lists in matching order and colors nodes by category index.

/// Kind of relation a dependency link represents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkCategory {
	/// The application's own artifact.
	Root,
	/// Needed at build/augmentation time only.
	Deployment,
	/// Part of the runtime classpath.
	Runtime,
}

impl LinkCategory {
	/// All categories, in category-index order.
	pub const ALL: [LinkCategory; 3] = [Self::Root, Self::Deployment, Self::Runtime];

	/// Look up a category by the kind string carried on a link.
	pub fn from_kind(kind: &str) -> Option<Self> {
		match kind {
			"root" => Some(Self::Root),
			"deployment" => Some(Self::Deployment),
			"runtime" => Some(Self::Runtime),
			_ => None,
		}
	}

	/// Display name, as shown in the widget legend.
	pub fn name(self) -> &'static str {
		match self {
			Self::Root => "root",
			Self::Deployment => "deployment",
			Self::Runtime => "runtime",
		}
	}

	/// Display color from the dashboard palette.
	pub fn color(self) -> &'static str {
		match self {
			Self::Root => "#ee6666",
			Self::Deployment => "#5470c6",
			Self::Runtime => "#fac858",
		}
	}

	/// Category index as passed to the widget.
	pub fn index(self) -> i32 {
		self as i32
	}

	/// Legend names in category-index order.
	pub fn names() -> [&'static str; 3] {
		Self::ALL.map(Self::name)
	}

	/// Legend colors, same length and order as [`Self::names`].
	pub fn colors() -> [&'static str; 3] {
		Self::ALL.map(Self::color)
	}
}
