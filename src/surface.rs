use super::*;
use std::collections::HashMap;

const TRACE_LOG_LIMIT: usize = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InputId(pub(crate) usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Number,
    Checkbox,
}

/// Capability interface over whatever renders the form. The controller only
/// ever touches inputs, the member list, the result area, and the error
/// notification channel through this trait, so its logic runs against any
/// surface, mock or real.
pub trait Surface {
    /// Checkbox inputs yield their checked state, everything else yields the
    /// raw text.
    fn value(&self, input: InputId) -> Result<FieldValue>;

    /// Type-dispatched reset: a checkbox goes back to unchecked and keeps
    /// its value text, everything else clears to empty text.
    fn reset_value(&mut self, input: InputId) -> Result<()>;

    fn append_member_item(&mut self, member: MemberId, record: &MemberRecord) -> Result<()>;
    fn remove_member_item(&mut self, member: MemberId) -> Result<()>;
    fn show_result(&mut self, text: &str) -> Result<()>;
    fn hide_result(&mut self) -> Result<()>;
    fn notify_errors(&mut self, message: &str) -> Result<()>;
}

#[derive(Debug, Clone)]
struct InputNode {
    name: String,
    kind: InputKind,
    value: String,
    checked: bool,
}

/// One rendered member entry: the detail lines shown to the user, one per
/// captured field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    pub member: MemberId,
    pub lines: Vec<String>,
}

#[derive(Debug, Clone, Default)]
struct ResultArea {
    text: String,
    visible: bool,
}

/// In-memory stand-in for the page: inputs addressed by name, the rendered
/// member list, the result area, and captured notifications. Every mutation
/// leaves a trace line that tests can drain.
#[derive(Debug, Default)]
pub struct MockSurface {
    inputs: Vec<InputNode>,
    name_index: HashMap<String, InputId>,
    list_items: Vec<ListItem>,
    result: ResultArea,
    notifications: Vec<String>,
    trace_logs: Vec<String>,
}

impl MockSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_input(&mut self, name: &str, kind: InputKind) -> InputId {
        let id = InputId(self.inputs.len());
        // Checkboxes without an explicit value report "on", as on a page.
        let value = match kind {
            InputKind::Checkbox => "on".to_string(),
            InputKind::Text | InputKind::Number => String::new(),
        };
        self.inputs.push(InputNode {
            name: name.to_string(),
            kind,
            value,
            checked: false,
        });
        self.name_index.insert(name.to_string(), id);
        id
    }

    pub fn input(&self, name: &str) -> Result<InputId> {
        self.name_index
            .get(name)
            .copied()
            .ok_or_else(|| Error::UnknownInput(name.to_string()))
    }

    pub fn type_text(&mut self, input: InputId, text: &str) -> Result<()> {
        let node = self.node_mut(input)?;
        if node.kind == InputKind::Checkbox {
            return Err(Error::TypeMismatch {
                input: node.name.clone(),
                expected: "text or number input".into(),
                actual: "checkbox".into(),
            });
        }
        node.value = text.to_string();
        let line = format!("type {}: {text}", node.name);
        self.trace(line);
        Ok(())
    }

    pub fn set_checked(&mut self, input: InputId, checked: bool) -> Result<()> {
        let node = self.node_mut(input)?;
        if node.kind != InputKind::Checkbox {
            return Err(Error::TypeMismatch {
                input: node.name.clone(),
                expected: "checkbox".into(),
                actual: match node.kind {
                    InputKind::Text => "text input".into(),
                    InputKind::Number => "number input".into(),
                    InputKind::Checkbox => "checkbox".into(),
                },
            });
        }
        node.checked = checked;
        let line = format!("check {}: {checked}", node.name);
        self.trace(line);
        Ok(())
    }

    /// Raw text value of an input, regardless of kind. Checkboxes keep
    /// theirs across resets.
    pub fn raw_value(&self, input: InputId) -> Result<&str> {
        Ok(self.node(input)?.value.as_str())
    }

    pub fn checked(&self, input: InputId) -> Result<bool> {
        Ok(self.node(input)?.checked)
    }

    pub fn list_items(&self) -> &[ListItem] {
        &self.list_items
    }

    pub fn result_text(&self) -> &str {
        &self.result.text
    }

    pub fn result_visible(&self) -> bool {
        self.result.visible
    }

    pub fn take_notifications(&mut self) -> Vec<String> {
        std::mem::take(&mut self.notifications)
    }

    pub fn take_trace_logs(&mut self) -> Vec<String> {
        std::mem::take(&mut self.trace_logs)
    }

    fn node(&self, input: InputId) -> Result<&InputNode> {
        self.inputs
            .get(input.0)
            .ok_or_else(|| Error::UnknownInput(format!("#{}", input.0)))
    }

    fn node_mut(&mut self, input: InputId) -> Result<&mut InputNode> {
        self.inputs
            .get_mut(input.0)
            .ok_or_else(|| Error::UnknownInput(format!("#{}", input.0)))
    }

    fn trace(&mut self, line: String) {
        self.trace_logs.push(line);
        while self.trace_logs.len() > TRACE_LOG_LIMIT {
            self.trace_logs.remove(0);
        }
    }
}

impl Surface for MockSurface {
    fn value(&self, input: InputId) -> Result<FieldValue> {
        let node = self.node(input)?;
        match node.kind {
            InputKind::Checkbox => Ok(FieldValue::Checked(node.checked)),
            InputKind::Text | InputKind::Number => Ok(FieldValue::Text(node.value.clone())),
        }
    }

    fn reset_value(&mut self, input: InputId) -> Result<()> {
        let node = self.node_mut(input)?;
        match node.kind {
            InputKind::Checkbox => node.checked = false,
            InputKind::Text | InputKind::Number => node.value.clear(),
        }
        let line = format!("reset {}", node.name);
        self.trace(line);
        Ok(())
    }

    fn append_member_item(&mut self, member: MemberId, record: &MemberRecord) -> Result<()> {
        let lines = record
            .entries()
            .iter()
            .map(|(field_id, value)| format!("{field_id}: {value}"))
            .collect();
        self.list_items.push(ListItem { member, lines });
        self.trace(format!("append person-{member}"));
        Ok(())
    }

    fn remove_member_item(&mut self, member: MemberId) -> Result<()> {
        let index = self
            .list_items
            .iter()
            .position(|item| item.member == member)
            .ok_or(Error::UnknownMember(member))?;
        self.list_items.remove(index);
        self.trace(format!("remove person-{member}"));
        Ok(())
    }

    fn show_result(&mut self, text: &str) -> Result<()> {
        self.result.text = text.to_string();
        self.result.visible = true;
        self.trace("result shown".to_string());
        Ok(())
    }

    fn hide_result(&mut self) -> Result<()> {
        // Only an actual transition is observable, as with a display toggle.
        if self.result.visible {
            self.result.visible = false;
            self.trace("result hidden".to_string());
        }
        Ok(())
    }

    fn notify_errors(&mut self, message: &str) -> Result<()> {
        self.notifications.push(message.to_string());
        self.trace("notify errors".to_string());
        Ok(())
    }
}
