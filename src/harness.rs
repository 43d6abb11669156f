use super::*;

/// Test driver wiring the controller to a mock surface with the standard
/// household page: a number input `age`, a text input `rel`, a checkbox
/// `smoker`, the add and submit controls, the member list, and a hidden
/// result area.
#[derive(Debug)]
pub struct Harness {
    surface: MockSurface,
    controller: FormController,
}

impl Harness {
    pub fn household() -> Self {
        let mut surface = MockSurface::new();
        let age = surface.add_input("age", InputKind::Number);
        let rel = surface.add_input("rel", InputKind::Text);
        let smoker = surface.add_input("smoker", InputKind::Checkbox);
        let controller = FormController::new(household_fields(age, rel, smoker));
        Self {
            surface,
            controller,
        }
    }

    /// A harness over a caller-built surface and field set, for pages other
    /// than the standard household one.
    pub fn with_parts(surface: MockSurface, fields: Vec<FieldDescriptor>) -> Self {
        Self {
            surface,
            controller: FormController::new(fields),
        }
    }

    pub fn surface(&self) -> &MockSurface {
        &self.surface
    }

    pub fn controller(&self) -> &FormController {
        &self.controller
    }

    pub fn type_text(&mut self, field: &str, text: &str) -> Result<()> {
        let input = self.surface.input(field)?;
        self.surface.type_text(input, text)
    }

    pub fn set_checked(&mut self, field: &str, checked: bool) -> Result<()> {
        let input = self.surface.input(field)?;
        self.surface.set_checked(input, checked)
    }

    pub fn click_add(&mut self) -> Result<Option<MemberId>> {
        self.controller.add_member(&mut self.surface)
    }

    pub fn click_remove(&mut self, member: MemberId) -> Result<()> {
        self.controller.remove_member(&mut self.surface, member)
    }

    pub fn click_submit(&mut self) -> Result<String> {
        self.controller.submit(&mut self.surface)
    }

    pub fn member_count(&self) -> usize {
        self.controller.state().len()
    }

    pub fn rendered_count(&self) -> usize {
        self.surface.list_items().len()
    }

    pub fn take_notifications(&mut self) -> Vec<String> {
        self.surface.take_notifications()
    }

    pub fn take_trace_logs(&mut self) -> Vec<String> {
        self.surface.take_trace_logs()
    }

    pub fn assert_value(&self, field: &str, expected: &str) -> Result<()> {
        let input = self.surface.input(field)?;
        let actual = self.surface.raw_value(input)?;
        if actual != expected {
            return Err(Error::AssertionFailed {
                target: field.to_string(),
                expected: expected.to_string(),
                actual: actual.to_string(),
            });
        }
        Ok(())
    }

    pub fn assert_checked(&self, field: &str, expected: bool) -> Result<()> {
        let input = self.surface.input(field)?;
        let actual = self.surface.checked(input)?;
        if actual != expected {
            return Err(Error::AssertionFailed {
                target: field.to_string(),
                expected: expected.to_string(),
                actual: actual.to_string(),
            });
        }
        Ok(())
    }

    pub fn assert_result(&self, expected: &str) -> Result<()> {
        if !self.surface.result_visible() {
            return Err(Error::AssertionFailed {
                target: "result".to_string(),
                expected: expected.to_string(),
                actual: "(hidden)".to_string(),
            });
        }
        let actual = self.surface.result_text();
        if actual != expected {
            return Err(Error::AssertionFailed {
                target: "result".to_string(),
                expected: expected.to_string(),
                actual: actual.to_string(),
            });
        }
        Ok(())
    }

    pub fn assert_result_hidden(&self) -> Result<()> {
        if self.surface.result_visible() {
            return Err(Error::AssertionFailed {
                target: "result".to_string(),
                expected: "(hidden)".to_string(),
                actual: self.surface.result_text().to_string(),
            });
        }
        Ok(())
    }
}
