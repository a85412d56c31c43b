use html::{element, void_element, Node};

pub struct Img {
	pub alt: String,
	pub src: String,
}

impl Img {
	/// The image opens full size when its summary is clicked.
	pub fn render(self) -> Node {
		element("details")
			.class("image-details")
			.child(
				element("summary").class("image-details-summary").child(
					void_element("img")
						.attribute("alt", self.alt.clone())
						.class("image-img")
						.attribute("src", self.src.clone()),
				),
			)
			.child(
				element("div").class("image-viewer").child(
					void_element("img")
						.attribute("alt", self.alt)
						.class("image-viewer-img")
						.attribute("src", self.src),
				),
			)
			.into()
	}
}
