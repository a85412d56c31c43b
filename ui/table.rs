use html::{element, Component, Node};

pub struct Table;

impl Component for Table {
	fn render(self, children: Vec<Node>) -> Node {
		element("div")
			.class("table-wrapper")
			.child(element("table").class("table").children(children))
			.into()
	}
}

/// Render a header row followed by body rows of plain text cells.
pub fn table_rows(header: &[&'static str], rows: Vec<Vec<Node>>) -> Vec<Node> {
	let header = element("thead").class("table-header").child(
		element("tr").children(
			header
				.iter()
				.map(|title| element("th").class("table-header-cell").child(*title)),
		),
	);
	let body = element("tbody").children(rows.into_iter().map(|row| {
		element("tr").children(
			row.into_iter()
				.map(|cell| element("td").class("table-cell").child(cell)),
		)
	}));
	vec![header.into(), body.into()]
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_table() {
		let rows = vec![vec!["a".into(), "b".into()]];
		let node = Table.render(table_rows(&["Id", "Crop"], rows));
		insta::assert_snapshot!(
			node.render_to_string(),
			@r###"<div class="table-wrapper"><table class="table"><thead class="table-header"><tr><th class="table-header-cell">Id</th><th class="table-header-cell">Crop</th></tr></thead><tbody><tr><td class="table-cell">a</td><td class="table-cell">b</td></tr></tbody></table></div>"###
		);
	}
}
