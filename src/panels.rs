use serde::Serialize;

/// Top-level groups of action buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonGroup {
    Add,
    Modify,
}

impl ButtonGroup {
    pub const ALL: [ButtonGroup; 2] = [ButtonGroup::Add, ButtonGroup::Modify];

    pub fn name(self) -> &'static str {
        match self {
            ButtonGroup::Add => "add",
            ButtonGroup::Modify => "modify",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|group| group.name() == name)
    }

    pub fn label(self) -> &'static str {
        match self {
            ButtonGroup::Add => "Add activities",
            ButtonGroup::Modify => "Edit or remove",
        }
    }

    pub fn panels(self) -> &'static [InputPanel] {
        match self {
            ButtonGroup::Add => &[InputPanel::AddOne, InputPanel::AddOneJson, InputPanel::AddJsonFile],
            ButtonGroup::Modify => &[InputPanel::EditOne, InputPanel::RemoveOne],
        }
    }
}

/// Input panels, one per form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum InputPanel {
    AddOne,
    AddOneJson,
    AddJsonFile,
    EditOne,
    RemoveOne,
}

impl InputPanel {
    pub const ALL: [InputPanel; 5] = [
        InputPanel::AddOne,
        InputPanel::AddOneJson,
        InputPanel::AddJsonFile,
        InputPanel::EditOne,
        InputPanel::RemoveOne,
    ];

    /// Element id of the panel on the page.
    pub fn id(self) -> &'static str {
        match self {
            InputPanel::AddOne => "addOne",
            InputPanel::AddOneJson => "addOneJson",
            InputPanel::AddJsonFile => "addJsonFile",
            InputPanel::EditOne => "editOne",
            InputPanel::RemoveOne => "removeOne",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|panel| panel.id() == id)
    }

    pub fn label(self) -> &'static str {
        match self {
            InputPanel::AddOne => "Add one",
            InputPanel::AddOneJson => "Add one as JSON",
            InputPanel::AddJsonFile => "Import JSON file",
            InputPanel::EditOne => "Edit one",
            InputPanel::RemoveOne => "Remove one",
        }
    }
}

/// Which button group and which input panel are currently shown.
///
/// At most one of each is visible; showing one hides the rest. Inputs of a
/// hidden panel are disabled so the browser neither validates nor submits them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Panels {
    visible_group: Option<ButtonGroup>,
    visible_input: Option<InputPanel>,
}

impl Panels {
    pub fn toggle_group(&mut self, group: ButtonGroup) {
        self.visible_group = if self.visible_group == Some(group) {
            None
        } else {
            Some(group)
        };
        self.visible_input = None;
    }

    pub fn toggle_input(&mut self, panel: InputPanel) {
        self.visible_input = if self.visible_input == Some(panel) {
            None
        } else {
            Some(panel)
        };
    }

    pub fn group_opacity(&self, group: ButtonGroup) -> u8 {
        u8::from(self.visible_group == Some(group))
    }

    pub fn input_opacity(&self, panel: InputPanel) -> u8 {
        u8::from(self.inputs_enabled(panel))
    }

    pub fn inputs_enabled(&self, panel: InputPanel) -> bool {
        self.visible_input == Some(panel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn everything_starts_hidden() {
        let panels = Panels::default();
        for group in ButtonGroup::ALL {
            assert_eq!(panels.group_opacity(group), 0);
        }
        for panel in InputPanel::ALL {
            assert_eq!(panels.input_opacity(panel), 0);
            assert!(!panels.inputs_enabled(panel));
        }
    }

    #[test]
    fn group_toggle_flips_and_hides_siblings() {
        let mut panels = Panels::default();
        panels.toggle_group(ButtonGroup::Add);
        assert_eq!(panels.group_opacity(ButtonGroup::Add), 1);
        assert_eq!(panels.group_opacity(ButtonGroup::Modify), 0);

        panels.toggle_group(ButtonGroup::Modify);
        assert_eq!(panels.group_opacity(ButtonGroup::Add), 0);
        assert_eq!(panels.group_opacity(ButtonGroup::Modify), 1);

        panels.toggle_group(ButtonGroup::Modify);
        assert_eq!(panels.group_opacity(ButtonGroup::Modify), 0);
    }

    #[test]
    fn group_toggle_hides_and_disables_every_input_panel() {
        let mut panels = Panels::default();
        panels.toggle_input(InputPanel::EditOne);
        assert!(panels.inputs_enabled(InputPanel::EditOne));

        panels.toggle_group(ButtonGroup::Add);
        for panel in InputPanel::ALL {
            assert_eq!(panels.input_opacity(panel), 0);
            assert!(!panels.inputs_enabled(panel));
        }
    }

    #[test]
    fn only_one_input_panel_is_enabled() {
        let mut panels = Panels::default();
        panels.toggle_input(InputPanel::AddOne);
        panels.toggle_input(InputPanel::RemoveOne);
        let enabled: Vec<_> = InputPanel::ALL
            .into_iter()
            .filter(|panel| panels.inputs_enabled(*panel))
            .collect();
        assert_eq!(enabled, vec![InputPanel::RemoveOne]);

        panels.toggle_input(InputPanel::RemoveOne);
        assert!(InputPanel::ALL.into_iter().all(|panel| !panels.inputs_enabled(panel)));
    }

    #[test]
    fn names_round_trip_through_lookup() {
        assert_eq!(InputPanel::from_id("addOneJson"), Some(InputPanel::AddOneJson));
        assert_eq!(InputPanel::from_id("nope"), None);
        assert_eq!(ButtonGroup::from_name("modify"), Some(ButtonGroup::Modify));
        assert!(ButtonGroup::Modify.panels().contains(&InputPanel::RemoveOne));
    }
}
