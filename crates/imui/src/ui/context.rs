//! UI Context
//!
//! Owns everything one UI surface needs between frames: the widget registry,
//! interaction and input state, and the draw command buffer. Application code
//! drives it once per frame:
//!
//! ```text
//! handle_event(..)*  begin_frame(dt)  <declarations>  end_frame()  render(backend)
//! ```

use super::backend::UIRenderBackend;
use super::draw::{DrawBuffer, DrawCommand};
use super::error::{fatal, UIError, UsageError};
use super::events::UIEvent;
use super::geometry::Rect;
use super::id::WidgetId;
use super::input::{InputEvent, InputState};
use super::interaction::InteractionState;
use super::layout;
use super::registry::Registry;
use super::tree::{self, FrameTree};
use super::widget::{Layout, Widget, WidgetFlags, WidgetHandle, WidgetKind};
use super::widgets::palette;
use crate::config::UIConfig;
use crate::foundation::math::{v2i, Vec2i};

/// Counters for the most recently completed frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameStats {
    /// Frame number (first frame is 1)
    pub frame: u64,
    /// Seconds accumulated from `begin_frame` deltas
    pub total_time: f32,
    /// Widgets declared, not counting the tree root
    pub widgets: usize,
    /// Draw commands emitted into the buffer
    pub commands: usize,
    /// Draw commands dropped on overflow
    pub dropped: usize,
}

/// Immediate-mode UI state for one surface
pub struct UIContext {
    config: UIConfig,
    pub(crate) registry: Registry,
    pub(crate) tree: FrameTree,
    pub(crate) interaction: InteractionState,
    pub(crate) input: InputState,
    draw: DrawBuffer,
    pub(crate) events: Vec<UIEvent>,
    viewport: Vec2i,
    frame: u64,
    frame_open: bool,
    total_time: f32,
    stats: FrameStats,
}

impl UIContext {
    /// Create a context from a validated configuration
    pub fn new(config: UIConfig) -> Result<Self, UIError> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    /// Create a context with the default configuration
    pub fn with_defaults() -> Self {
        Self::from_valid_config(UIConfig::default())
    }

    fn from_valid_config(config: UIConfig) -> Self {
        log::info!(
            "UI context created (draw capacity {}, overflow {:?}, viewport {}x{})",
            config.draw_capacity,
            config.overflow_policy,
            config.viewport[0],
            config.viewport[1]
        );

        Self {
            draw: DrawBuffer::new(config.draw_capacity, config.overflow_policy),
            viewport: config.viewport_size(),
            config,
            registry: Registry::new(),
            tree: FrameTree::new(),
            interaction: InteractionState::new(),
            input: InputState::new(),
            events: Vec::new(),
            frame: 0,
            frame_open: false,
            total_time: 0.0,
            stats: FrameStats::default(),
        }
    }

    // --- Input -------------------------------------------------------------

    /// Feed one event from the windowing layer. Deliver events before `begin_frame`.
    pub fn handle_event(&mut self, event: InputEvent) {
        self.input.handle_event(event);
    }

    /// Feed a batch of events
    pub fn handle_events(&mut self, events: impl IntoIterator<Item = InputEvent>) {
        for event in events {
            self.input.handle_event(event);
        }
    }

    /// Set the render target size in pixels
    pub fn set_viewport(&mut self, width: i32, height: i32) {
        log::debug!("UI viewport {}x{}", width, height);
        self.viewport = v2i(width, height);
    }

    // --- Frame protocol ----------------------------------------------------

    /// Start a frame
    ///
    /// # Panics
    /// If the previous frame was not ended.
    pub fn begin_frame(&mut self, dt: f32) {
        if self.frame_open {
            fatal(UsageError::FrameAlreadyOpen(self.frame));
        }
        self.frame += 1;
        self.total_time += dt;
        self.frame_open = true;

        if !self.draw.is_empty() {
            log::debug!("discarding {} commands that were never rendered", self.draw.len());
            self.draw.clear();
        }
        self.tree.reset();
        self.events.clear();
        self.input.resolve_edges();

        log::trace!(
            "frame {} begin (pointer {:?}, down {}, went_down {}, went_up {})",
            self.frame,
            self.input.pointer(),
            self.input.is_down(),
            self.input.went_down(),
            self.input.went_up()
        );
    }

    /// Open a plain widget as a child of the innermost open widget
    ///
    /// Plain widgets only group their children; they have no rectangle of
    /// their own and place children where they are declared.
    pub fn begin_widget(&mut self, id: impl Into<WidgetId>) -> WidgetHandle {
        let handle = self.open_widget(id.into());
        let widget = &mut self.registry[handle];
        widget.flags = WidgetFlags::empty();
        widget.layout = Layout::None;
        widget.kind = WidgetKind::Plain;
        widget.pos = Vec2i::zeros();
        widget.dim = Vec2i::zeros();
        handle
    }

    /// Close the innermost open widget
    ///
    /// Reserves the widget's slot in its parent's layout: containers by the
    /// extent of their children, everything else by its own size. A closing
    /// container stores its extent as `dim` so an enclosing container
    /// measures this frame's size, not last frame's.
    pub fn end_widget(&mut self) {
        self.require_frame();
        let handle = self.tree.end(&self.registry);
        let margin = self.config.layout_margin;

        let parent = self.registry[handle].links.parent;
        let extent = if self.registry[handle].is_container() {
            let extent = layout::measure(&self.registry, handle, margin);
            self.registry[handle].dim = extent;
            extent
        } else {
            self.registry[handle].dim
        };
        if let Some(parent) = parent {
            layout::advance(&mut self.registry, parent, extent, margin);
        }
    }

    /// Finish the frame: layout, then paint into the draw buffer
    ///
    /// # Panics
    /// If no frame is open or a widget is still open.
    pub fn end_frame(&mut self) {
        self.require_frame();
        self.tree.finish(&self.registry);

        layout::run(&mut self.registry, self.tree.root(), self.config.layout_margin);
        let widgets = self.paint();

        self.interaction.end_frame();
        self.input.end_frame();
        self.frame_open = false;

        let dropped = self.draw.dropped();
        if dropped > 0 {
            log::warn!(
                "frame {}: dropped {} draw command(s), capacity {}",
                self.frame,
                dropped,
                self.draw.capacity()
            );
        }

        self.stats = FrameStats {
            frame: self.frame,
            total_time: self.total_time,
            widgets,
            commands: self.draw.len(),
            dropped,
        };
        log::trace!(
            "frame {} end ({} widgets, {} commands, hover {:?}, hot {:?}, active {:?})",
            self.frame,
            widgets,
            self.draw.len(),
            self.interaction.hover(),
            self.interaction.hot(),
            self.interaction.active()
        );
    }

    /// Hand the frame's commands to `backend`, then clear the buffer
    ///
    /// The buffer is cleared whether or not the backend succeeds.
    ///
    /// # Panics
    /// If called between `begin_frame` and `end_frame`.
    pub fn render(&mut self, backend: &mut dyn UIRenderBackend) -> Result<(), UIError> {
        if self.frame_open {
            fatal(UsageError::RenderDuringFrame(self.frame));
        }
        log::debug!("UI submitting {} commands", self.draw.len());
        let result = backend.submit(self.draw.commands(), self.viewport);
        self.draw.clear();
        result.map_err(UIError::Backend)
    }

    /// Release every widget and forget interaction state. Safe to call twice.
    pub fn shutdown(&mut self) {
        self.registry.release_all();
        self.tree.reset();
        self.interaction.reset();
        self.events.clear();
        self.draw.clear();
        self.frame_open = false;
    }

    // --- Queries -----------------------------------------------------------

    /// Active configuration
    pub fn config(&self) -> &UIConfig {
        &self.config
    }

    /// Current render target size
    pub fn viewport(&self) -> Vec2i {
        self.viewport
    }

    /// Number of the current (or last) frame
    pub fn frame_number(&self) -> u64 {
        self.frame
    }

    /// Whether a frame is between `begin_frame` and `end_frame`
    pub fn in_frame(&self) -> bool {
        self.frame_open
    }

    /// Hot / active / hover state
    pub fn interaction(&self) -> &InteractionState {
        &self.interaction
    }

    /// Pointer state
    pub fn input(&self) -> &InputState {
        &self.input
    }

    /// All widgets seen so far
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Widget record for `id`, if it was ever declared
    pub fn widget(&self, id: impl Into<WidgetId>) -> Option<&Widget> {
        self.registry.find(id.into())
    }

    /// Root of the current frame's tree
    pub fn root(&self) -> Option<WidgetHandle> {
        self.tree.root()
    }

    /// Commands waiting for `render`
    pub fn draw_commands(&self) -> &[DrawCommand] {
        self.draw.commands()
    }

    /// Interactions committed during the current frame
    pub fn events(&self) -> &[UIEvent] {
        &self.events
    }

    /// Counters of the last completed frame
    pub fn stats(&self) -> FrameStats {
        self.stats
    }

    // --- Internals shared with widget behaviors ----------------------------

    pub(crate) fn open_widget(&mut self, id: WidgetId) -> WidgetHandle {
        self.require_frame();
        self.tree.begin(&mut self.registry, id, self.frame)
    }

    pub(crate) fn require_frame(&self) {
        if !self.frame_open {
            fatal(UsageError::NoOpenFrame);
        }
    }

    pub(crate) fn layout_margin(&self) -> i32 {
        self.config.layout_margin
    }

    pub(crate) fn default_slider_range(&self) -> (f32, f32) {
        let [min, max] = self.config.slider_range;
        (min, max)
    }

    pub(crate) fn parent_of(&self, handle: WidgetHandle) -> WidgetHandle {
        match self.registry[handle].links.parent {
            Some(parent) => parent,
            None => fatal(UsageError::EndWithoutBegin),
        }
    }

    /// Walk the tree in paint order and fill the draw buffer. Returns the
    /// number of widgets visited, excluding the root.
    fn paint(&mut self) -> usize {
        let order = tree::depth_first(&self.registry, self.tree.root());
        let mut widgets = 0;
        for handle in order {
            let widget = &self.registry[handle];
            if widget.id == WidgetId::ROOT {
                continue;
            }
            widgets += 1;
            if widget.flags.contains(WidgetFlags::CONTAINER | WidgetFlags::DRAW_BACKGROUND) {
                self.draw.push_rect(Rect::from_pos_dim(widget.pos, widget.dim), palette::container_background());
            }
            for command in &widget.draws {
                self.draw.push(*command);
            }
        }
        widgets
    }
}

impl Default for UIContext {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl Drop for UIContext {
    fn drop(&mut self) {
        self.shutdown();
    }
}
