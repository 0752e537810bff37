//! Bidirectional text/slider synchronization.
//!
//! Each [`InputSliderSync`] owns one field's surface and reacts to three
//! events:
//!
//! - **slider move**: the text mirrors the slider verbatim;
//! - **live edit**: the slider follows the text only while the parsed text is
//!   in range, so the user can type freely;
//! - **commit**: out-of-range text is clamped into `[min, max]`.
//!
//! The change hook runs after every event, including live edits that were
//! not mirrored, so recalculation always sees the latest text.

use tracing::debug;

use crate::field::{display_value, BoundField, FieldId};
use crate::input::parse_input;
use crate::surface::{FieldSurface, FieldWidgets};

/// Interaction events delivered to a bound field.
///
/// The host updates the surface first (the user dragged or typed), then
/// delivers the event, mirroring how browser events follow widget updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldEvent {
    /// Slider dragged (continuous `input`).
    SliderInput,
    /// Text edited, e.g. per keystroke (`input`).
    TextInput,
    /// Text committed, e.g. blur or Enter (`change`).
    TextCommit,
}

/// Change hook invoked after every settled event.
pub type ChangeHook = Box<dyn FnMut(FieldId)>;

/// One text input and slider kept mutually consistent.
pub struct InputSliderSync<S: FieldSurface> {
    id: FieldId,
    field: BoundField,
    surface: S,
    on_change: ChangeHook,
}

impl<S: FieldSurface> InputSliderSync<S> {
    /// Wire a field to its surface. The fill indicator is computed
    /// immediately from the current slider position.
    pub fn bind(id: FieldId, field: BoundField, surface: S, on_change: ChangeHook) -> Self {
        let mut sync = Self {
            id,
            field,
            surface,
            on_change,
        };
        sync.update_fill();
        sync
    }

    /// Field identifier.
    #[must_use]
    pub fn id(&self) -> FieldId {
        self.id
    }

    /// Bounds and settled value.
    #[must_use]
    pub fn field(&self) -> &BoundField {
        &self.field
    }

    /// The underlying widgets.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Value the next calculation will use: the parsed text, which may be
    /// transiently out of range during a live edit.
    #[must_use]
    pub fn request_value(&self) -> f64 {
        parse_input(self.surface.text())
    }

    /// Deliver an event after the host has updated the surface.
    pub fn handle(&mut self, event: FieldEvent) {
        match event {
            FieldEvent::SliderInput => self.on_slider_input(),
            FieldEvent::TextInput => self.on_text_input(),
            FieldEvent::TextCommit => self.on_text_commit(),
        }
        (self.on_change)(self.id);
    }

    /// Drag the slider to `value`. Like a native range input, the slider
    /// cannot leave its bounds and snaps to its step.
    pub fn slide_to(&mut self, value: f64) {
        let value = self.field.quantize(self.field.clamp(value));
        self.surface.set_slider(value);
        self.handle(FieldEvent::SliderInput);
    }

    /// Replace the text as if typed, then deliver a live edit.
    pub fn type_text(&mut self, text: impl Into<String>) {
        self.surface.set_text(text.into());
        self.handle(FieldEvent::TextInput);
    }

    /// Replace the text, then deliver a commit.
    pub fn commit_text(&mut self, text: impl Into<String>) {
        self.surface.set_text(text.into());
        self.handle(FieldEvent::TextCommit);
    }

    /// Set text and slider to `value` without invoking the change hook.
    pub fn reset(&mut self, value: f64) {
        self.surface.set_text(display_value(value));
        self.surface.set_slider(value);
        self.field.value = value;
    }

    /// Recompute the fill indicator from the slider position.
    pub fn update_fill(&mut self) {
        let percent = self.field.fill_percent(self.surface.slider());
        self.surface.set_fill(percent);
    }

    fn on_slider_input(&mut self) {
        let value = self.surface.slider();
        self.surface.set_text(display_value(value));
        self.field.value = value;
        self.update_fill();
    }

    fn on_text_input(&mut self) {
        let value = parse_input(self.surface.text());
        if self.field.contains(value) {
            self.mirror_to_slider(value);
        }
    }

    fn on_text_commit(&mut self) {
        let value = parse_input(self.surface.text());
        if self.field.contains(value) {
            self.mirror_to_slider(value);
            return;
        }

        let clamped = self.field.clamp(value);
        debug!(
            field = %self.id,
            value,
            clamped,
            "clamped committed value into slider bounds"
        );
        self.surface.set_text(display_value(clamped));
        self.surface.set_slider(clamped);
        self.field.value = clamped;
        self.update_fill();
    }

    fn mirror_to_slider(&mut self, value: f64) {
        self.surface.set_slider(self.field.quantize(value));
        self.field.value = value;
        self.update_fill();
    }
}

/// Numeric values read from the six fields for one calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldValues {
    pub investment_amount: f64,
    pub exit_load_rate: f64,
    pub redemption_amount: f64,
    /// Years, as entered.
    pub exit_load_period_years: f64,
    pub purchase_nav: f64,
    pub current_nav: f64,
}

impl FieldValues {
    /// Startup defaults.
    #[must_use]
    pub fn defaults() -> Self {
        Self::from_fn(|id| id.default_field().value)
    }

    /// Build from a per-field lookup.
    pub fn from_fn(mut get: impl FnMut(FieldId) -> f64) -> Self {
        Self {
            investment_amount: get(FieldId::InvestmentAmount),
            exit_load_rate: get(FieldId::ExitLoadRate),
            redemption_amount: get(FieldId::RedemptionAmount),
            exit_load_period_years: get(FieldId::ExitLoadPeriod),
            purchase_nav: get(FieldId::PurchaseNav),
            current_nav: get(FieldId::CurrentNav),
        }
    }

    /// Value of one field.
    #[must_use]
    pub fn get(&self, id: FieldId) -> f64 {
        match id {
            FieldId::InvestmentAmount => self.investment_amount,
            FieldId::ExitLoadRate => self.exit_load_rate,
            FieldId::RedemptionAmount => self.redemption_amount,
            FieldId::ExitLoadPeriod => self.exit_load_period_years,
            FieldId::PurchaseNav => self.purchase_nav,
            FieldId::CurrentNav => self.current_nav,
        }
    }
}

impl Default for FieldValues {
    fn default() -> Self {
        Self::defaults()
    }
}

/// The six bound fields of the calculator.
pub struct FieldSet<S: FieldSurface = FieldWidgets> {
    syncs: Vec<InputSliderSync<S>>,
}

impl FieldSet<FieldWidgets> {
    /// Bind all six fields to in-memory widgets at their defaults.
    pub fn with_defaults<F>(on_change: F) -> Self
    where
        F: FnMut(FieldId) + Clone + 'static,
    {
        Self::bind(
            |id| FieldWidgets::with_value(id.default_field().value),
            on_change,
        )
    }
}

impl<S: FieldSurface> FieldSet<S> {
    /// Bind all six fields, creating each surface with `make_surface`.
    pub fn bind<F>(mut make_surface: impl FnMut(FieldId) -> S, on_change: F) -> Self
    where
        F: FnMut(FieldId) + Clone + 'static,
    {
        let syncs = FieldId::ALL
            .iter()
            .map(|&id| {
                InputSliderSync::bind(
                    id,
                    id.default_field(),
                    make_surface(id),
                    Box::new(on_change.clone()),
                )
            })
            .collect();
        Self { syncs }
    }

    /// Reset every field to its startup default and refresh all fills.
    /// The change hook is not invoked.
    pub fn initial_sync(&mut self) {
        for sync in &mut self.syncs {
            sync.reset(sync.id().default_field().value);
        }
        self.update_all_fills();
    }

    /// Recompute every slider's fill indicator.
    pub fn update_all_fills(&mut self) {
        for sync in &mut self.syncs {
            sync.update_fill();
        }
    }

    /// Access one field.
    #[must_use]
    pub fn get(&self, id: FieldId) -> &InputSliderSync<S> {
        &self.syncs[id.index()]
    }

    /// Mutable access to one field.
    pub fn get_mut(&mut self, id: FieldId) -> &mut InputSliderSync<S> {
        &mut self.syncs[id.index()]
    }

    /// Iterate fields in display order.
    pub fn iter(&self) -> impl Iterator<Item = &InputSliderSync<S>> {
        self.syncs.iter()
    }

    /// Current request values read from the text inputs.
    #[must_use]
    pub fn values(&self) -> FieldValues {
        FieldValues::from_fn(|id| self.get(id).request_value())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    fn counting_sync(field: BoundField) -> (InputSliderSync<FieldWidgets>, Rc<Cell<u32>>) {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let sync = InputSliderSync::bind(
            FieldId::InvestmentAmount,
            field,
            FieldWidgets::with_value(field.value),
            Box::new(move |_| counter.set(counter.get() + 1)),
        );
        (sync, calls)
    }

    fn unit_field() -> BoundField {
        BoundField::new(50.0, 0.0, 100.0, None)
    }

    #[test]
    fn bind_computes_fill() {
        let (sync, calls) = counting_sync(unit_field());
        assert!((sync.surface().fill - 50.0).abs() < f64::EPSILON);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn slider_move_mirrors_text() {
        let (mut sync, calls) = counting_sync(unit_field());
        sync.slide_to(25.0);
        assert_eq!(sync.surface().text, "25");
        assert!((sync.surface().fill - 25.0).abs() < f64::EPSILON);
        assert!((sync.field().value - 25.0).abs() < f64::EPSILON);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn slider_cannot_leave_bounds() {
        let (mut sync, _) = counting_sync(unit_field());
        sync.slide_to(250.0);
        assert_eq!(sync.surface().text, "100");
        assert!((sync.surface().slider - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn live_edit_in_range_mirrors_slider() {
        let (mut sync, calls) = counting_sync(unit_field());
        sync.type_text("75");
        assert!((sync.surface().slider - 75.0).abs() < f64::EPSILON);
        assert!((sync.surface().fill - 75.0).abs() < f64::EPSILON);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn live_edit_out_of_range_leaves_slider_but_notifies() {
        let (mut sync, calls) = counting_sync(unit_field());
        sync.type_text("500");
        assert_eq!(sync.surface().text, "500");
        assert!((sync.surface().slider - 50.0).abs() < f64::EPSILON);
        assert!((sync.surface().fill - 50.0).abs() < f64::EPSILON);
        assert!((sync.request_value() - 500.0).abs() < f64::EPSILON);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn live_edit_empty_is_not_clamped() {
        let field = BoundField::new(50.0, 10.0, 100.0, None);
        let (mut sync, calls) = counting_sync(field);
        sync.type_text("");
        assert_eq!(sync.surface().text, "");
        assert!((sync.surface().slider - 50.0).abs() < f64::EPSILON);
        assert!(sync.request_value().abs() < f64::EPSILON);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn commit_below_min_clamps_both() {
        let field = BoundField::new(50.0, 10.0, 100.0, None);
        let (mut sync, calls) = counting_sync(field);
        sync.commit_text("3");
        assert_eq!(sync.surface().text, "10");
        assert!((sync.surface().slider - 10.0).abs() < f64::EPSILON);
        assert!(sync.surface().fill.abs() < f64::EPSILON);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn commit_above_max_clamps_both() {
        let (mut sync, _) = counting_sync(unit_field());
        sync.commit_text("1e9");
        assert_eq!(sync.surface().text, "100");
        assert!((sync.surface().slider - 100.0).abs() < f64::EPSILON);
        assert!((sync.surface().fill - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn commit_garbage_clamps_zero_to_min() {
        let field = BoundField::new(50.0, 10.0, 100.0, None);
        let (mut sync, _) = counting_sync(field);
        sync.commit_text("abc");
        assert_eq!(sync.surface().text, "10");
    }

    #[test]
    fn commit_in_range_keeps_text() {
        let (mut sync, _) = counting_sync(unit_field());
        sync.commit_text("33.5");
        assert_eq!(sync.surface().text, "33.5");
        assert!((sync.surface().slider - 33.5).abs() < f64::EPSILON);
    }

    #[test]
    fn stepped_slider_quantizes_but_text_keeps_typed_value() {
        let field = BoundField::new(1.0, 0.0, 5.0, Some(0.5));
        let (mut sync, _) = counting_sync(field);
        sync.commit_text("1.2");
        assert_eq!(sync.surface().text, "1.2");
        assert!((sync.surface().slider - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn field_set_defaults_and_values() {
        let set = FieldSet::with_defaults(|_| {});
        let values = set.values();
        assert_eq!(values, FieldValues::defaults());
        assert!((values.investment_amount - 100_000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn field_set_hook_reports_field() {
        let seen = Rc::new(Cell::new(None));
        let sink = Rc::clone(&seen);
        let mut set = FieldSet::with_defaults(move |id| sink.set(Some(id)));
        set.get_mut(FieldId::CurrentNav).type_text("15");
        assert_eq!(seen.get(), Some(FieldId::CurrentNav));
        assert!((set.values().current_nav - 15.0).abs() < f64::EPSILON);
    }

    #[test]
    fn initial_sync_restores_defaults_silently() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let mut set = FieldSet::with_defaults(move |_| counter.set(counter.get() + 1));
        set.get_mut(FieldId::ExitLoadRate).commit_text("4");
        assert_eq!(calls.get(), 1);

        set.initial_sync();
        assert_eq!(calls.get(), 1);
        assert_eq!(set.get(FieldId::ExitLoadRate).surface().text, "1");
        let fill = set.get(FieldId::ExitLoadRate).surface().fill;
        assert!((fill - 20.0).abs() < 1e-9);
    }

    #[test]
    fn field_values_lookup() {
        let values = FieldValues::defaults();
        for id in FieldId::ALL {
            assert!((values.get(id) - id.default_field().value).abs() < f64::EPSILON);
        }
    }
}
