use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::core::BoxSize;
use crate::error::{WidgetError, WidgetResult};
use crate::interaction::{HookHandle, OwnerId, PointerHookKind, PointerHookRegistry};

/// Which box the element is positioned against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PositionMode {
    /// Viewport-relative; the container is the visible page.
    #[default]
    Fixed,
    /// Relative to the element's offset parent.
    Parent,
}

impl PositionMode {
    #[must_use]
    pub fn css_position(self) -> &'static str {
        match self {
            Self::Fixed => "fixed",
            Self::Parent => "absolute",
        }
    }
}

/// Initial placement applied on mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    /// Keep the current position (clamped).
    #[default]
    Keep,
    /// Uniformly random within bounds.
    Random,
    /// Centered within bounds.
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DragConfig {
    #[serde(default)]
    pub mode: PositionMode,
    #[serde(default)]
    pub placement: Placement,
}

impl DragConfig {
    pub fn from_json_str(json: &str) -> WidgetResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Inline style applied when the behavior binds to an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragStyle {
    pub position: &'static str,
    pub cursor: &'static str,
    pub user_select: &'static str,
}

impl DragStyle {
    #[must_use]
    pub fn declarations(self) -> [(&'static str, &'static str); 3] {
        [
            ("position", self.position),
            ("cursor", self.cursor),
            ("user-select", self.user_select),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub left: f64,
    pub top: f64,
}

/// Largest allowed offsets; the lower bound is always zero.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DragBounds {
    pub max_left: f64,
    pub max_top: f64,
}

impl DragBounds {
    #[must_use]
    pub fn between(element: BoxSize, container: BoxSize) -> Self {
        Self {
            max_left: (container.width - element.width).max(0.0),
            max_top: (container.height - element.height).max(0.0),
        }
    }

    #[must_use]
    pub fn clamp(self, left: f64, top: f64) -> Position {
        Position {
            left: left.clamp(0.0, self.max_left),
            top: top.clamp(0.0, self.max_top),
        }
    }

    #[must_use]
    pub fn contains(self, x: f64, y: f64) -> bool {
        (0.0..=self.max_left).contains(&x) && (0.0..=self.max_top).contains(&y)
    }
}

/// One pointer sample delivered while a gesture is live.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PointerSample {
    pub client_x: f64,
    pub client_y: f64,
    pub page_x: f64,
    pub page_y: f64,
}

impl PointerSample {
    /// Sample for an unscrolled page where client and page coordinates agree.
    #[must_use]
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            client_x: x,
            client_y: y,
            page_x: x,
            page_y: y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragStep {
    Moved(Position),
    /// The pointer left the draggable area; hooks are gone and later
    /// samples are ignored until the next press.
    Detached(Position),
    /// No gesture is live; the sample was ignored.
    Idle(Position),
}

/// Live press-drag-release gesture; owns the document pointer hooks.
#[derive(Debug)]
struct ActiveGesture {
    grab: (f64, f64),
    _move_hook: HookHandle,
    _up_hook: HookHandle,
}

/// Draggable positioning behavior attached to one element.
///
/// Press, move and release arrive as separate host callbacks, so the
/// gesture lives inside the behavior. Its hooks are removed on release,
/// on escape, on the next press and when the behavior is dropped.
#[derive(Debug)]
pub struct Draggable {
    config: DragConfig,
    owner: OwnerId,
    hooks: PointerHookRegistry,
    element: BoxSize,
    container: BoxSize,
    origin: Position,
    bounds: DragBounds,
    position: Position,
    gesture: Option<ActiveGesture>,
}

impl Draggable {
    #[must_use]
    pub fn attach(hooks: &PointerHookRegistry, config: DragConfig) -> Self {
        Self {
            config,
            owner: hooks.allocate_owner(),
            hooks: hooks.clone(),
            element: BoxSize::default(),
            container: BoxSize::default(),
            origin: Position::default(),
            bounds: DragBounds::default(),
            position: Position::default(),
            gesture: None,
        }
    }

    #[must_use]
    pub fn config(&self) -> DragConfig {
        self.config
    }

    #[must_use]
    pub fn owner(&self) -> OwnerId {
        self.owner
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub fn bounds(&self) -> DragBounds {
        self.bounds
    }

    #[must_use]
    pub fn container_origin(&self) -> Position {
        self.origin
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.gesture.is_some()
    }

    #[must_use]
    pub fn bind_style(&self) -> DragStyle {
        DragStyle {
            position: self.config.mode.css_position(),
            cursor: "pointer",
            user_select: "none",
        }
    }

    /// `left`/`top` inline style values for the current position.
    #[must_use]
    pub fn style_offsets(&self) -> (String, String) {
        (
            format!("{}px", self.position.left),
            format!("{}px", self.position.top),
        )
    }

    /// Computes bounds for the inserted element and applies the initial placement.
    pub fn mount<G: Rng + ?Sized>(
        &mut self,
        element: BoxSize,
        container: BoxSize,
        rng: &mut G,
    ) -> Position {
        self.element = element;
        self.container = container;
        self.bounds = DragBounds::between(element, container);

        let (left, top) = match self.config.placement {
            Placement::Keep => (self.position.left, self.position.top),
            Placement::Random => (
                rng.r#gen::<f64>() * self.bounds.max_left,
                rng.r#gen::<f64>() * self.bounds.max_top,
            ),
            Placement::Center => (self.bounds.max_left / 2.0, self.bounds.max_top / 2.0),
        };
        self.position = self.bounds.clamp(left, top);

        debug!(
            owner = ?self.owner,
            placement = ?self.config.placement,
            left = self.position.left,
            top = self.position.top,
            "draggable mounted"
        );
        self.position
    }

    /// Page coordinate of the offset parent's top-left corner.
    ///
    /// Only parent mode uses it: pointer samples are shifted by it before
    /// the escape test. Fixed mode tests raw page coordinates.
    pub fn set_container_origin(&mut self, page_x: f64, page_y: f64) -> WidgetResult<()> {
        if !page_x.is_finite() || !page_y.is_finite() {
            return Err(WidgetError::InvalidData(
                "container origin must be finite".to_owned(),
            ));
        }
        self.origin = Position {
            left: page_x,
            top: page_y,
        };
        Ok(())
    }

    /// Recomputes bounds after the container (viewport in fixed mode) resized.
    ///
    /// Safe during a live gesture; later moves clamp to the new bounds.
    pub fn resize_container(&mut self, container: BoxSize) -> Position {
        self.container = container;
        self.refresh_bounds()
    }

    /// Recomputes bounds when the pointer re-enters; element size may have changed.
    pub fn pointer_enter(&mut self, element: BoxSize, container: BoxSize) -> Position {
        self.element = element;
        self.container = container;
        self.refresh_bounds()
    }

    fn refresh_bounds(&mut self) -> Position {
        self.bounds = DragBounds::between(self.element, self.container);
        self.position = self.bounds.clamp(self.position.left, self.position.top);
        self.position
    }

    /// Starts a gesture at the pressed client coordinate and registers
    /// the move/up hooks. A gesture still live from an earlier press is
    /// replaced.
    pub fn press(&mut self, client_x: f64, client_y: f64) -> WidgetResult<()> {
        if !client_x.is_finite() || !client_y.is_finite() {
            return Err(WidgetError::InvalidData(
                "press coordinates must be finite".to_owned(),
            ));
        }

        // Old hooks go before new ones are registered.
        self.gesture = None;
        let grab = (client_x - self.position.left, client_y - self.position.top);
        self.gesture = Some(ActiveGesture {
            grab,
            _move_hook: self.hooks.register(PointerHookKind::Move, self.owner),
            _up_hook: self.hooks.register(PointerHookKind::Up, self.owner),
        });
        trace!(owner = ?self.owner, grab_x = grab.0, grab_y = grab.1, "drag gesture started");
        Ok(())
    }

    /// Applies one pointer move. Non-finite samples are ignored.
    pub fn pointer_move(&mut self, sample: PointerSample) -> DragStep {
        let Some(grab) = self.gesture.as_ref().map(|gesture| gesture.grab) else {
            return DragStep::Idle(self.position);
        };
        if !sample.client_x.is_finite() || !sample.client_y.is_finite() {
            return DragStep::Moved(self.position);
        }

        let (area_x, area_y) = match self.config.mode {
            PositionMode::Fixed => (sample.page_x, sample.page_y),
            PositionMode::Parent => (
                sample.page_x - self.origin.left,
                sample.page_y - self.origin.top,
            ),
        };
        let escaped = !self.bounds.contains(area_x, area_y);
        if escaped {
            warn!(
                owner = ?self.owner,
                x = area_x,
                y = area_y,
                "pointer left draggable area; detaching gesture"
            );
            self.gesture = None;
        }

        self.position = self
            .bounds
            .clamp(sample.client_x - grab.0, sample.client_y - grab.1);
        trace!(left = self.position.left, top = self.position.top, "drag move");

        if escaped {
            DragStep::Detached(self.position)
        } else {
            DragStep::Moved(self.position)
        }
    }

    /// Ends the gesture, dropping its hooks, and returns the final position.
    pub fn release(&mut self) -> Position {
        if self.gesture.take().is_some() {
            trace!(owner = ?self.owner, "drag gesture released");
        }
        self.position
    }
}
