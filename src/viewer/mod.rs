// SPDX-License-Identifier: MPL-2.0
//! Lightbox viewer: a two-state machine (Closed/Open) over one image at a
//! time.
//!
//! While open, the viewer owns the current index into the visible ordering
//! *frozen at open time*, the composed display transform, the gesture
//! trackers, and the focus trap. Closing destroys the session; every
//! navigation resets the transform to identity and invalidates any
//! in-flight metadata probe.
//!
//! The viewer is headless: state transitions are plain methods, and the
//! operations that need the outside world (download, share, probing,
//! focus) take the relevant port as an argument.

pub mod drag;
pub mod focus;
pub mod input;
pub mod rotation;
pub mod transform;
pub mod zoom;

pub use drag::{Point, SwipeDirection};
pub use input::KeyAction;
pub use transform::Transform;

use crate::application::port::platform::{PlatformCapabilities, SharePayload};
use crate::application::port::network::RemoteFetcher;
use crate::application::port::presentation::PresentationSurface;
use crate::domain::{ImageRecord, RecordId};
use crate::media::download::file_name_for;
use crate::media::probe::{ImageDetails, ProbeError};
use drag::{DragState, SwipeTracker, TapTracker};
use focus::{FocusId, FocusTrap};
use std::time::Instant;

/// Toast shown after the clipboard share fallback succeeds.
const SHARE_COPIED_TOAST: &str = "Image URL copied to clipboard";

/// Prompt message for the last-resort share fallback.
const SHARE_PROMPT: &str = "Copy image URL:";

/// Identity check for a deferred metadata probe.
///
/// A completion whose ticket no longer matches the viewer's serial and
/// current record is stale and must be discarded, so a slow probe can
/// never overwrite the labels of an image the user has since navigated to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeTicket {
    serial: u64,
    id: RecordId,
}

impl ProbeTicket {
    #[must_use]
    pub fn record_id(&self) -> &RecordId {
        &self.id
    }
}

/// What a completed touch sequence did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchOutcome {
    /// Nothing recognized; the sequence ended a drag or fell below the
    /// gesture thresholds.
    None,
    /// A horizontal swipe navigated to another image.
    Navigated,
    /// A double tap toggled the zoom.
    ZoomToggled,
}

#[derive(Debug, Clone)]
struct Session {
    records: Vec<ImageRecord>,
    current_index: usize,
    transform: Transform,
    drag: DragState,
    taps: TapTracker,
    swipe: SwipeTracker,
    trap: FocusTrap,
    last_focused: Option<FocusId>,
    details: Option<ImageDetails>,
}

/// The lightbox interaction controller.
#[derive(Debug, Clone, Default)]
pub struct Viewer {
    session: Option<Session>,
    /// Monotonic counter identifying the currently displayed image; bumped
    /// on open and on every navigation.
    probe_serial: u64,
}

impl Viewer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the lightbox at `index` into the given visible ordering.
    ///
    /// The ordering is frozen for the lifetime of the session: catalog
    /// recomputation while the lightbox is open does not rebind it.
    /// Returns `false` (and stays Closed) when `index` is out of range.
    pub fn open(
        &mut self,
        records: Vec<ImageRecord>,
        index: usize,
        last_focused: Option<FocusId>,
        focusables: Vec<FocusId>,
    ) -> bool {
        if index >= records.len() {
            return false;
        }
        self.probe_serial += 1;
        self.session = Some(Session {
            records,
            current_index: index,
            transform: Transform::identity(),
            drag: DragState::default(),
            taps: TapTracker::default(),
            swipe: SwipeTracker::default(),
            trap: FocusTrap::new(focusables),
            last_focused,
            details: None,
        });
        true
    }

    /// Closes the lightbox and returns the element that held focus before
    /// opening, for the host to restore. No-op when already Closed.
    pub fn close(&mut self) -> Option<FocusId> {
        self.session.take().and_then(|session| session.last_focused)
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.session.as_ref().map(|s| s.current_index)
    }

    #[must_use]
    pub fn current_record(&self) -> Option<&ImageRecord> {
        self.session.as_ref().map(|s| &s.records[s.current_index])
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.session.as_ref().map_or(0, |s| s.records.len())
    }

    #[must_use]
    pub fn transform(&self) -> Option<&Transform> {
        self.session.as_ref().map(|s| &s.transform)
    }

    /// The composed transform as a CSS value, for the presentation surface.
    #[must_use]
    pub fn transform_css(&self) -> Option<String> {
        self.transform().map(Transform::to_css)
    }

    /// `"<position> / <total>"` counter, 1-based.
    #[must_use]
    pub fn counter_label(&self) -> Option<String> {
        let session = self.session.as_ref()?;
        Some(format!(
            "{} / {}",
            session.current_index + 1,
            session.records.len()
        ))
    }

    #[must_use]
    pub fn current_details(&self) -> Option<&ImageDetails> {
        self.session.as_ref().and_then(|s| s.details.as_ref())
    }

    /// Element the host should focus right after opening.
    #[must_use]
    pub fn initial_focus(&self) -> Option<&FocusId> {
        self.session.as_ref().and_then(|s| s.trap.first())
    }

    /// Steps to the next (`+1`) or previous (`-1`) image, wrapping in both
    /// directions. Resets the transform and invalidates in-flight probes.
    /// With a single visible image this is a no-op on the selected
    /// identity, but the transform still resets.
    pub fn navigate(&mut self, direction: i32) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        let len = session.records.len();
        let step = if direction >= 0 { 1 } else { len - 1 };
        session.current_index = (session.current_index + step) % len;
        session.transform = Transform::identity();
        session.details = None;
        self.probe_serial += 1;
        true
    }

    /// Sets the zoom scale, clamped to the valid range. Landing back at 1x
    /// re-centers the image.
    pub fn set_scale(&mut self, target: f32) {
        if let Some(session) = self.session.as_mut() {
            session.transform.set_scale(target);
        }
    }

    pub fn zoom_in(&mut self) {
        if let Some(session) = self.session.as_mut() {
            let target = session.transform.scale.zoom_in().value();
            session.transform.set_scale(target);
        }
    }

    pub fn zoom_out(&mut self) {
        if let Some(session) = self.session.as_mut() {
            let target = session.transform.scale.zoom_out().value();
            session.transform.set_scale(target);
        }
    }

    /// Rotates the image 90° clockwise.
    pub fn rotate(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.transform.rotation = session.transform.rotation.rotate_clockwise();
        }
    }

    /// Accumulates a pan offset. Ignored while unzoomed.
    pub fn pan(&mut self, dx: f32, dy: f32) {
        if let Some(session) = self.session.as_mut() {
            if !session.transform.scale.is_unzoomed() {
                session.transform.pan_by(dx, dy);
            }
        }
    }

    /// Starts a pointer drag. Only meaningful while zoomed; returns whether
    /// a drag actually began.
    pub fn begin_drag(&mut self, at: Point) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        if session.transform.scale.is_unzoomed() {
            return false;
        }
        session.drag.start(at);
        true
    }

    /// Advances an active drag, panning by the pointer delta.
    pub fn drag_to(&mut self, at: Point) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        match session.drag.advance(at) {
            Some((dx, dy)) => {
                session.transform.pan_by(dx, dy);
                true
            }
            None => false,
        }
    }

    pub fn end_drag(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.drag.stop();
        }
    }

    /// A double click toggles between unzoomed and the double-tap scale.
    pub fn double_click(&mut self) {
        if let Some(session) = self.session.as_mut() {
            let target = session.transform.scale.toggled().value();
            session.transform.set_scale(target);
        }
    }

    /// Touch-down: a zoomed image starts a pan drag, an unzoomed one starts
    /// swipe tracking.
    pub fn touch_start(&mut self, at: Point) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if session.transform.scale.is_unzoomed() {
            session.swipe.begin(at);
        } else {
            session.drag.start(at);
        }
    }

    /// Touch-move: pans while a drag is active.
    pub fn touch_move(&mut self, at: Point) {
        self.drag_to(at);
    }

    /// Touch-up: finishes the sequence. A drag that actually moved just
    /// ends; an unzoomed swipe past the thresholds navigates; any
    /// stationary touch counts as a tap, and a second tap within the
    /// recognition window toggles the zoom (in both zoom directions).
    pub fn touch_end(&mut self, at: Point, when: Instant) -> TouchOutcome {
        let Some(session) = self.session.as_mut() else {
            return TouchOutcome::None;
        };
        if session.drag.is_active() {
            let moved = session.drag.has_moved();
            session.drag.stop();
            session.swipe.cancel();
            if moved {
                return TouchOutcome::None;
            }
            if session.taps.register(when) {
                self.double_click();
                return TouchOutcome::ZoomToggled;
            }
            return TouchOutcome::None;
        }
        if let Some(direction) = session.swipe.end(at) {
            let step = match direction {
                SwipeDirection::Left => 1,
                SwipeDirection::Right => -1,
            };
            self.navigate(step);
            return TouchOutcome::Navigated;
        }
        if session.taps.register(when) {
            self.double_click();
            return TouchOutcome::ZoomToggled;
        }
        TouchOutcome::None
    }

    /// Wheel input: one zoom step per event by delta sign. Returns whether
    /// the event was consumed; it is not when the platform zoom modifier is
    /// held (the host keeps its own zoom behavior) or the lightbox is
    /// Closed.
    pub fn wheel(&mut self, delta_y: f32, zoom_modifier: bool) -> bool {
        if !self.is_open() || zoom_modifier {
            return false;
        }
        if delta_y > 0.0 {
            self.zoom_out();
        } else {
            self.zoom_in();
        }
        true
    }

    /// Runs the focus trap for a Tab press: wraps at the boundary elements,
    /// lets the host's natural order proceed elsewhere. Returns whether
    /// focus was redirected.
    pub fn handle_tab(&mut self, backward: bool, surface: &mut dyn PresentationSurface) -> bool {
        let Some(session) = self.session.as_ref() else {
            return false;
        };
        let Some(current) = surface.focused_element() else {
            return false;
        };
        match session.trap.redirect(&current, backward) {
            Some(target) => {
                let target = target.clone();
                surface.focus(&target);
                true
            }
            None => false,
        }
    }

    /// Requests fullscreen for the lightbox surface. State tracking is the
    /// host's job; the platform reports the result through its own channel.
    pub fn toggle_fullscreen(&self, platform: &mut dyn PlatformCapabilities) {
        if self.is_open() {
            platform.toggle_fullscreen();
        }
    }

    /// Downloads the current full-resolution asset and triggers a local
    /// save; on any fetch failure, falls back to opening the source
    /// externally. Best-effort: nothing is surfaced to the caller.
    pub fn download(&self, fetcher: &dyn RemoteFetcher, platform: &mut dyn PlatformCapabilities) {
        let Some(record) = self.current_record() else {
            return;
        };
        match fetcher.fetch(&record.full_source) {
            Ok(bytes) => {
                let file_name = file_name_for(&record.title, &record.full_source);
                if let Err(error) = platform.save_file(&file_name, &bytes) {
                    eprintln!("Failed to save download: {}", error);
                }
            }
            Err(_) => platform.open_external(&record.full_source),
        }
    }

    /// Shares the current image through the documented fallback chain:
    /// share sheet, else clipboard copy plus confirmation toast, else a
    /// synchronous prompt. All failures, including user cancellation, are
    /// absorbed.
    pub fn share(
        &self,
        platform: &mut dyn PlatformCapabilities,
        surface: &mut dyn PresentationSurface,
    ) {
        let Some(record) = self.current_record() else {
            return;
        };
        let payload = SharePayload {
            title: record.title.clone(),
            text: record.title.clone(),
            url: record.full_source.clone(),
        };
        if platform.supports_share() {
            let _ = platform.share(&payload);
        } else if platform.supports_clipboard() {
            if platform.clipboard_write(&payload.url).is_ok() {
                surface.show_toast(SHARE_COPIED_TOAST);
            }
        } else {
            platform.prompt(SHARE_PROMPT, &payload.url);
        }
    }

    /// Issues a probe ticket for the current image. The host resolves the
    /// probe off the input path (fetch + [`crate::media::probe::inspect`])
    /// and delivers the outcome through [`Viewer::apply_probe`].
    #[must_use]
    pub fn describe_current(&self) -> Option<ProbeTicket> {
        self.current_record().map(|record| ProbeTicket {
            serial: self.probe_serial,
            id: record.id.clone(),
        })
    }

    /// Applies a completed probe. A stale ticket (superseded by navigation
    /// or reopening, or delivered while Closed) is discarded. Probe failure
    /// clears the detail labels; it is not an error.
    ///
    /// Returns whether the outcome was applied.
    pub fn apply_probe(
        &mut self,
        ticket: &ProbeTicket,
        outcome: Result<ImageDetails, ProbeError>,
        surface: &mut dyn PresentationSurface,
    ) -> bool {
        let serial = self.probe_serial;
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        let current = &session.records[session.current_index];
        if ticket.serial != serial || ticket.id != current.id {
            return false;
        }
        match outcome {
            Ok(details) => {
                surface.show_details(&details.resolution_label(), &details.size_label());
                session.details = Some(details);
            }
            Err(_) => {
                surface.show_details("", "");
                session.details = None;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::network::FetchError;
    use crate::test_utils::{sample_records, RecordingSurface, StubPlatform};
    use std::time::Duration;

    struct FailingFetcher;

    impl RemoteFetcher for FailingFetcher {
        fn fetch(&self, _url: &str) -> Result<Vec<u8>, FetchError> {
            Err(FetchError::Status(503))
        }
    }

    struct StaticFetcher(Vec<u8>);

    impl RemoteFetcher for StaticFetcher {
        fn fetch(&self, _url: &str) -> Result<Vec<u8>, FetchError> {
            Ok(self.0.clone())
        }
    }

    fn open_viewer(index: usize) -> Viewer {
        let mut viewer = Viewer::new();
        assert!(viewer.open(sample_records(), index, None, Vec::new()));
        viewer
    }

    #[test]
    fn open_out_of_range_stays_closed() {
        let mut viewer = Viewer::new();
        assert!(!viewer.open(sample_records(), 5, None, Vec::new()));
        assert!(!viewer.is_open());
        assert!(!viewer.open(Vec::new(), 0, None, Vec::new()));
        assert!(!viewer.is_open());
    }

    #[test]
    fn open_resets_transform_and_selects_record() {
        let viewer = open_viewer(2);
        assert!(viewer.is_open());
        assert_eq!(viewer.current_index(), Some(2));
        assert!(viewer.transform().is_some_and(Transform::is_identity));
        assert_eq!(viewer.counter_label().as_deref(), Some("3 / 5"));
    }

    #[test]
    fn close_returns_captured_focus_target() {
        let mut viewer = Viewer::new();
        viewer.open(
            sample_records(),
            0,
            Some(FocusId::from("grid-item-0")),
            Vec::new(),
        );
        assert_eq!(viewer.close(), Some(FocusId::from("grid-item-0")));
        assert!(!viewer.is_open());
        assert!(viewer.close().is_none());
    }

    #[test]
    fn navigate_wraps_in_both_directions() {
        let mut viewer = open_viewer(4);
        viewer.navigate(1);
        assert_eq!(viewer.current_index(), Some(0));
        viewer.navigate(-1);
        assert_eq!(viewer.current_index(), Some(4));
    }

    #[test]
    fn navigate_twice_backwards_from_index_two_lands_on_zero() {
        let mut viewer = open_viewer(2);
        viewer.navigate(-1);
        assert!(viewer.transform().is_some_and(Transform::is_identity));
        viewer.navigate(-1);
        assert_eq!(viewer.current_index(), Some(0));
        assert!(viewer.transform().is_some_and(Transform::is_identity));
    }

    #[test]
    fn navigate_with_single_image_keeps_identity() {
        let mut viewer = Viewer::new();
        let records = vec![sample_records().remove(0)];
        viewer.open(records, 0, None, Vec::new());
        let before = viewer.current_record().cloned();
        viewer.navigate(1);
        assert_eq!(viewer.current_record().cloned(), before);
        viewer.navigate(-1);
        assert_eq!(viewer.current_record().cloned(), before);
    }

    #[test]
    fn navigation_resets_a_dirty_transform() {
        let mut viewer = open_viewer(0);
        viewer.set_scale(3.0);
        viewer.pan(25.0, 10.0);
        viewer.rotate();
        viewer.navigate(1);
        assert!(viewer.transform().is_some_and(Transform::is_identity));
    }

    #[test]
    fn set_scale_clamps_and_resets_pan_at_minimum() {
        let mut viewer = open_viewer(0);
        viewer.set_scale(10.0);
        assert_eq!(viewer.transform().map(|t| t.scale.value()), Some(4.0));
        viewer.pan(12.0, -7.0);
        viewer.set_scale(0.0);
        let transform = viewer.transform().copied().expect("viewer is open");
        assert_eq!(transform.scale.value(), 1.0);
        assert_eq!((transform.pan_x, transform.pan_y), (0.0, 0.0));
    }

    #[test]
    fn four_rotations_return_to_zero() {
        let mut viewer = open_viewer(0);
        for _ in 0..4 {
            viewer.rotate();
        }
        assert_eq!(viewer.transform().map(|t| t.rotation.degrees()), Some(0));
    }

    #[test]
    fn pan_is_ignored_while_unzoomed() {
        let mut viewer = open_viewer(0);
        viewer.pan(30.0, 30.0);
        let transform = viewer.transform().copied().expect("viewer is open");
        assert_eq!((transform.pan_x, transform.pan_y), (0.0, 0.0));
    }

    #[test]
    fn drag_pans_only_when_zoomed() {
        let mut viewer = open_viewer(0);
        assert!(!viewer.begin_drag(Point::new(100.0, 100.0)));

        viewer.set_scale(2.0);
        assert!(viewer.begin_drag(Point::new(100.0, 100.0)));
        assert!(viewer.drag_to(Point::new(110.0, 95.0)));
        let transform = viewer.transform().copied().expect("viewer is open");
        assert_eq!((transform.pan_x, transform.pan_y), (10.0, -5.0));
        viewer.end_drag();
        assert!(!viewer.drag_to(Point::new(120.0, 95.0)));
    }

    #[test]
    fn double_click_toggles_between_one_and_two() {
        let mut viewer = open_viewer(0);
        viewer.double_click();
        assert_eq!(viewer.transform().map(|t| t.scale.value()), Some(2.0));
        viewer.double_click();
        assert_eq!(viewer.transform().map(|t| t.scale.value()), Some(1.0));
    }

    #[test]
    fn double_tap_within_window_toggles_zoom() {
        let mut viewer = open_viewer(0);
        let start = Instant::now();
        let at = Point::new(50.0, 50.0);
        viewer.touch_start(at);
        assert_eq!(viewer.touch_end(at, start), TouchOutcome::None);
        viewer.touch_start(at);
        assert_eq!(
            viewer.touch_end(at, start + Duration::from_millis(120)),
            TouchOutcome::ZoomToggled
        );
        assert_eq!(viewer.transform().map(|t| t.scale.value()), Some(2.0));
    }

    #[test]
    fn unzoomed_swipe_navigates() {
        let mut viewer = open_viewer(0);
        viewer.touch_start(Point::new(200.0, 100.0));
        let outcome = viewer.touch_end(Point::new(120.0, 105.0), Instant::now());
        assert_eq!(outcome, TouchOutcome::Navigated);
        assert_eq!(viewer.current_index(), Some(1));
    }

    #[test]
    fn rightward_swipe_navigates_backwards() {
        let mut viewer = open_viewer(1);
        viewer.touch_start(Point::new(100.0, 100.0));
        let outcome = viewer.touch_end(Point::new(190.0, 100.0), Instant::now());
        assert_eq!(outcome, TouchOutcome::Navigated);
        assert_eq!(viewer.current_index(), Some(0));
    }

    #[test]
    fn zoomed_touch_pans_instead_of_swiping() {
        let mut viewer = open_viewer(0);
        viewer.set_scale(2.0);
        viewer.touch_start(Point::new(200.0, 100.0));
        viewer.touch_move(Point::new(150.0, 100.0));
        let outcome = viewer.touch_end(Point::new(150.0, 100.0), Instant::now());
        assert_eq!(outcome, TouchOutcome::None);
        assert_eq!(viewer.current_index(), Some(0));
        let transform = viewer.transform().copied().expect("viewer is open");
        assert_eq!(transform.pan_x, -50.0);
    }

    #[test]
    fn zoomed_double_tap_returns_to_unzoomed() {
        let mut viewer = open_viewer(0);
        viewer.set_scale(2.0);
        let start = Instant::now();
        let at = Point::new(80.0, 80.0);

        viewer.touch_start(at);
        assert_eq!(viewer.touch_end(at, start), TouchOutcome::None);
        viewer.touch_start(at);
        assert_eq!(
            viewer.touch_end(at, start + Duration::from_millis(120)),
            TouchOutcome::ZoomToggled
        );
        assert_eq!(viewer.transform().map(|t| t.scale.value()), Some(1.0));
    }

    #[test]
    fn panning_touches_do_not_arm_the_double_tap() {
        let mut viewer = open_viewer(0);
        viewer.set_scale(2.0);
        let start = Instant::now();

        viewer.touch_start(Point::new(80.0, 80.0));
        viewer.touch_move(Point::new(120.0, 80.0));
        assert_eq!(
            viewer.touch_end(Point::new(120.0, 80.0), start),
            TouchOutcome::None
        );
        // The next stationary tap is a first tap, not a completing one
        viewer.touch_start(Point::new(120.0, 80.0));
        assert_eq!(
            viewer.touch_end(Point::new(120.0, 80.0), start + Duration::from_millis(100)),
            TouchOutcome::None
        );
        assert_eq!(viewer.transform().map(|t| t.scale.value()), Some(2.0));
    }

    #[test]
    fn wheel_zooms_by_delta_sign() {
        let mut viewer = open_viewer(0);
        assert!(viewer.wheel(-3.0, false));
        assert_eq!(viewer.transform().map(|t| t.scale.value()), Some(1.25));
        assert!(viewer.wheel(5.0, false));
        assert_eq!(viewer.transform().map(|t| t.scale.value()), Some(1.0));
    }

    #[test]
    fn wheel_with_zoom_modifier_is_not_consumed() {
        let mut viewer = open_viewer(0);
        assert!(!viewer.wheel(-3.0, true));
        assert_eq!(viewer.transform().map(|t| t.scale.value()), Some(1.0));
    }

    #[test]
    fn wheel_while_closed_is_not_consumed() {
        let mut viewer = Viewer::new();
        assert!(!viewer.wheel(-3.0, false));
    }

    #[test]
    fn tab_redirects_only_at_boundaries() {
        let mut viewer = Viewer::new();
        viewer.open(
            sample_records(),
            0,
            None,
            vec![FocusId::from("close"), FocusId::from("next")],
        );
        let mut surface = RecordingSurface::default();

        surface.set_focused(Some(FocusId::from("next")));
        assert!(viewer.handle_tab(false, &mut surface));
        assert_eq!(surface.focused(), Some(FocusId::from("close")));

        surface.set_focused(Some(FocusId::from("close")));
        assert!(!viewer.handle_tab(false, &mut surface));
        assert!(viewer.handle_tab(true, &mut surface));
        assert_eq!(surface.focused(), Some(FocusId::from("next")));
    }

    #[test]
    fn download_failure_falls_back_to_external_open_once() {
        let viewer = open_viewer(1);
        let mut platform = StubPlatform::default();
        viewer.download(&FailingFetcher, &mut platform);
        let source = viewer.current_record().expect("open").full_source.clone();
        assert_eq!(platform.opened_external, vec![source]);
        assert!(platform.saved_files.is_empty());
    }

    #[test]
    fn download_success_saves_with_derived_name() {
        let viewer = open_viewer(0);
        let mut platform = StubPlatform::default();
        viewer.download(&StaticFetcher(vec![1, 2, 3]), &mut platform);
        assert_eq!(platform.saved_files.len(), 1);
        let (name, bytes) = &platform.saved_files[0];
        assert_eq!(name, "dunes.jpg");
        assert_eq!(bytes, &vec![1, 2, 3]);
        assert!(platform.opened_external.is_empty());
    }

    #[test]
    fn share_prefers_the_share_sheet() {
        let viewer = open_viewer(0);
        let mut platform = StubPlatform {
            has_share: true,
            has_clipboard: true,
            ..StubPlatform::default()
        };
        let mut surface = RecordingSurface::default();
        viewer.share(&mut platform, &mut surface);
        assert_eq!(platform.shared.len(), 1);
        assert!(platform.clipboard.is_empty());
        assert!(surface.toasts.is_empty());
    }

    #[test]
    fn share_falls_back_to_clipboard_with_toast() {
        let viewer = open_viewer(0);
        let mut platform = StubPlatform {
            has_clipboard: true,
            ..StubPlatform::default()
        };
        let mut surface = RecordingSurface::default();
        viewer.share(&mut platform, &mut surface);
        let url = viewer.current_record().expect("open").full_source.clone();
        assert_eq!(platform.clipboard, vec![url]);
        assert_eq!(surface.toasts, vec![SHARE_COPIED_TOAST.to_string()]);
    }

    #[test]
    fn failed_clipboard_write_shows_no_toast() {
        let viewer = open_viewer(0);
        let mut platform = StubPlatform {
            has_clipboard: true,
            fail_writes: true,
            ..StubPlatform::default()
        };
        let mut surface = RecordingSurface::default();
        viewer.share(&mut platform, &mut surface);
        assert!(platform.clipboard.is_empty());
        assert!(surface.toasts.is_empty());
        assert!(platform.prompts.is_empty());
    }

    #[test]
    fn share_falls_back_to_prompt_without_capabilities() {
        let viewer = open_viewer(0);
        let mut platform = StubPlatform::default();
        let mut surface = RecordingSurface::default();
        viewer.share(&mut platform, &mut surface);
        assert_eq!(platform.prompts.len(), 1);
        assert!(surface.toasts.is_empty());
    }

    #[test]
    fn probe_outcome_applies_to_the_current_image() {
        let mut viewer = open_viewer(0);
        let mut surface = RecordingSurface::default();
        let ticket = viewer.describe_current().expect("open");
        let details = ImageDetails {
            width: 1920,
            height: 1080,
            approx_encoded_bytes: 2048,
        };
        assert!(viewer.apply_probe(&ticket, Ok(details), &mut surface));
        assert_eq!(
            surface.details,
            Some(("1920 x 1080".to_string(), "2.00 KB".to_string()))
        );
        assert_eq!(viewer.current_details(), Some(&details));
    }

    #[test]
    fn stale_probe_after_navigation_is_discarded() {
        let mut viewer = open_viewer(0);
        let mut surface = RecordingSurface::default();
        let ticket = viewer.describe_current().expect("open");
        viewer.navigate(1);
        let details = ImageDetails {
            width: 640,
            height: 480,
            approx_encoded_bytes: 100,
        };
        assert!(!viewer.apply_probe(&ticket, Ok(details), &mut surface));
        assert!(surface.details.is_none());
        assert!(viewer.current_details().is_none());
    }

    #[test]
    fn probe_failure_clears_labels() {
        let mut viewer = open_viewer(0);
        let mut surface = RecordingSurface::default();
        let ticket = viewer.describe_current().expect("open");
        assert!(viewer.apply_probe(
            &ticket,
            Err(ProbeError::Decode("cross-origin".to_string())),
            &mut surface,
        ));
        assert_eq!(surface.details, Some((String::new(), String::new())));
    }

    #[test]
    fn probe_delivered_after_close_is_discarded() {
        let mut viewer = open_viewer(0);
        let mut surface = RecordingSurface::default();
        let ticket = viewer.describe_current().expect("open");
        viewer.close();
        let details = ImageDetails {
            width: 1,
            height: 1,
            approx_encoded_bytes: 1,
        };
        assert!(!viewer.apply_probe(&ticket, Ok(details), &mut surface));
    }
}
