use super::*;

/// Owns the fixed field set and the form state; every user-facing workflow
/// (add, remove, submit) runs through here against an injected surface.
#[derive(Debug)]
pub struct FormController {
    fields: Vec<FieldDescriptor>,
    state: FormState,
}

impl FormController {
    pub fn new(fields: Vec<FieldDescriptor>) -> Self {
        Self {
            fields,
            state: FormState::new(),
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Error messages of all failing fields, in field order. Empty means
    /// the form is valid. Reads the surface, changes nothing.
    pub fn validation_errors(&self, surface: &dyn Surface) -> Result<Vec<&'static str>> {
        let mut errors = Vec::new();
        for field in &self.fields {
            let value = surface.value(field.input)?;
            if field.failing(&value) {
                errors.push(field.error_message);
            }
        }
        Ok(errors)
    }

    /// The add workflow. On validation failure every message is surfaced in
    /// one notification, one per line, and nothing else changes; `Ok(None)`
    /// reports the blocked add. On success the captured record lands in the
    /// state, a list item is rendered, all inputs reset, and any displayed
    /// submission result is hidden.
    pub fn add_member(&mut self, surface: &mut dyn Surface) -> Result<Option<MemberId>> {
        let errors = self.validation_errors(surface)?;
        if !errors.is_empty() {
            let mut message = String::new();
            for error in &errors {
                message.push_str(error);
                message.push('\n');
            }
            surface.notify_errors(&message)?;
            return Ok(None);
        }

        let mut record = MemberRecord::new();
        for field in &self.fields {
            record.push(field.id, surface.value(field.input)?);
        }
        let member = self.state.insert(record);
        let record = self
            .state
            .record(member)
            .ok_or(Error::UnknownMember(member))?;
        surface.append_member_item(member, record)?;

        for field in &self.fields {
            surface.reset_value(field.input)?;
        }
        surface.hide_result()?;
        Ok(Some(member))
    }

    /// The remove workflow: drop the rendered item and the state entry,
    /// hide any displayed submission result. No validation.
    pub fn remove_member(&mut self, surface: &mut dyn Surface, member: MemberId) -> Result<()> {
        surface.remove_member_item(member)?;
        if !self.state.remove(member) {
            return Err(Error::UnknownMember(member));
        }
        surface.hide_result()?;
        Ok(())
    }

    /// The submit workflow: serialize every record in insertion order to a
    /// JSON array, display it verbatim, and return the text. No validation,
    /// no state mutation.
    pub fn submit(&self, surface: &mut dyn Surface) -> Result<String> {
        let json =
            serde_json::to_string(&self.state).map_err(|error| Error::Serialize(error.to_string()))?;
        surface.show_result(&json)?;
        Ok(json)
    }
}
