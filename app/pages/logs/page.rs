use ahrc_app_common::logs::{LogType, SystemStatus};
use ahrc_app_layouts::{app_layout::AppLayout, document::PageInfo};
use ahrc_irrigation::IrrigationRecord;
use ahrc_ui as ui;
use html::{element, Component, Node};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tab {
	Decisions,
	Records,
	Status,
}

impl Tab {
	const ALL: [Tab; 3] = [Tab::Decisions, Tab::Records, Tab::Status];

	fn as_str(self) -> &'static str {
		match self {
			Tab::Decisions => "decisions",
			Tab::Records => "records",
			Tab::Status => "status",
		}
	}

	fn title(self) -> &'static str {
		match self {
			Tab::Decisions => "Decision Logs",
			Tab::Records => "Records",
			Tab::Status => "System Status",
		}
	}

	pub fn href(self) -> &'static str {
		match self {
			Tab::Decisions => "/logs?tab=decisions",
			Tab::Records => "/logs?tab=records",
			Tab::Status => "/logs?tab=status",
		}
	}
}

impl std::str::FromStr for Tab {
	type Err = ();
	fn from_str(s: &str) -> Result<Tab, ()> {
		Tab::ALL
			.iter()
			.find(|tab| tab.as_str() == s)
			.copied()
			.ok_or(())
	}
}

pub enum TabContent {
	Decisions(Result<Vec<String>, String>),
	Records(Result<Vec<IrrigationRecord>, String>),
	Status(SystemStatus),
}

pub struct Page {
	pub tab: Tab,
	pub content: TabContent,
	/// Why the last clear or delete failed.
	pub error: Option<String>,
}

impl Page {
	pub fn render(self) -> String {
		let selected = self.tab;
		let tabs: Vec<Node> = Tab::ALL
			.iter()
			.map(|tab| {
				ui::TabLink {
					href: tab.href().to_owned(),
					selected: *tab == selected,
				}
				.render(vec![tab.title().into()])
			})
			.collect();
		let error = self.error.map(|error| {
			ui::Alert::new(ui::Level::Danger)
				.title("The action failed.")
				.render(vec![error.into()])
		});
		let content = match self.content {
			TabContent::Decisions(decisions) => decisions_tab(decisions),
			TabContent::Records(records) => records_tab(records),
			TabContent::Status(status) => status_tab(status),
		};
		let body = ui::S1.render(vec![
			ui::H1::default().render(vec!["Logs".into()]),
			ui::TabBar.render(tabs),
			error.into(),
			clear_buttons(),
			content,
		]);
		AppLayout {
			page_info: PageInfo {
				title: "Logs".to_owned(),
			},
			selected: Some("/logs"),
		}
		.render(vec![body])
		.render_to_string()
	}
}

fn clear_buttons() -> Node {
	let buttons = LogType::ALL.iter().map(|log_type| {
		ui::Button::action("log_type", log_type.as_str())
			.color("var(--red)")
			.render(vec![log_type.label().into()])
	});
	let mut children = vec![ui::TextField::hidden("action", "clear_logs").render()];
	children.extend(buttons);
	element("div")
		.class("log-actions")
		.child(ui::Form::post().action("/logs").render(children))
		.into()
}

fn load_failed(what: &'static str, error: String) -> Node {
	ui::Alert::new(ui::Level::Warning)
		.title(format!("The {} could not be loaded.", what))
		.render(vec![error.into()])
}

fn decisions_tab(decisions: Result<Vec<String>, String>) -> Node {
	let decisions = match decisions {
		Ok(decisions) => decisions,
		Err(error) => return load_failed("decision logs", error),
	};
	if decisions.is_empty() {
		return ui::P.render(vec!["No decisions have been logged.".into()]);
	}
	element("pre")
		.class("log-lines")
		.children(
			decisions
				.into_iter()
				.map(|line| element("div").class("log-line").child(line)),
		)
		.into()
}

fn records_tab(records: Result<Vec<IrrigationRecord>, String>) -> Node {
	let records = match records {
		Ok(records) => records,
		Err(error) => return load_failed("records", error),
	};
	if records.is_empty() {
		return ui::P.render(vec!["No records.".into()]);
	}
	let rows = records
		.into_iter()
		.map(|record| {
			let decision = if record.turn_on_pump { "Yes" } else { "No" };
			let delete = ui::Form::post().action("/logs").render(vec![
				ui::TextField::hidden("action", "delete_record").render(),
				ui::TextField::hidden("record_id", record.id.clone()).render(),
				ui::Button::submit()
					.color("var(--red)")
					.render(vec!["Delete".into()]),
			]);
			vec![
				record.timestamp.into(),
				format!("{}, {}", record.latitude, record.longitude).into(),
				record.crop_name.into(),
				record.cropped_area.to_string().into(),
				record.last_irrigation_date.into(),
				record.days_since_irrigation.to_string().into(),
				decision.into(),
				record.pump_running_time.into(),
				record.notes.into(),
				delete,
			]
		})
		.collect();
	ui::Table.render(ui::table_rows(
		&[
			"Timestamp",
			"Location",
			"Crop",
			"Area (acres)",
			"Last Irrigation",
			"Days Since",
			"Pump On",
			"Running Time",
			"Notes",
			"",
		],
		rows,
	))
}

fn status_tab(status: SystemStatus) -> Node {
	let color = if status.status == "ok" || status.status == "healthy" {
		"var(--green)"
	} else {
		"var(--gray)"
	};
	let error = status
		.error
		.map(|error| load_failed("service status", error));
	let rows = vec![
		vec![
			"Status".into(),
			ui::Token {
				color: Some(color.to_owned()),
			}
			.render(vec![status.status.into()]),
		],
		vec!["Timestamp".into(), status.timestamp.into()],
		vec![
			"API Log Size".into(),
			format!("{:.2} KB", status.logs.api_log_size_kb).into(),
		],
		vec![
			"Decision Log Size".into(),
			format!("{:.2} KB", status.logs.decision_log_size_kb).into(),
		],
		vec![
			"Record File Size".into(),
			format!("{:.2} KB", status.logs.record_file_size_kb).into(),
		],
		vec![
			"Record Count".into(),
			status.logs.record_count.to_string().into(),
		],
	];
	ui::S2.render(vec![
		error.into(),
		ui::Table.render(ui::table_rows(&["Field", "Value"], rows)),
	])
}
