use super::*;

/// One labelled shape submitted to a [`DrawSurface`].
#[derive(Debug, Clone)]
pub struct DrawCommand {
    /// Names the part being drawn, e.g. `"mount.tail"`.
    pub label: &'static str,
    pub shape: Shape,
    /// Maps the shape's local coordinates to surface pixels.
    pub transform: Transform,
    /// Set for shapes whose geometry never changes between frames.
    pub cache_key: Option<u64>,
}

/// Anything the figure can be drawn on.
pub trait DrawSurface {
    fn size(&self) -> (u32, u32);

    /// Discards everything drawn so far.
    fn clear(&mut self);

    /// Draws on top of everything drawn since the last [`DrawSurface::clear`].
    fn push(&mut self, command: DrawCommand);
}

impl DrawSurface for Canvas {
    fn size(&self) -> (u32, u32) {
        self.size
    }

    fn clear(&mut self) {
        self.clear_draw_queue();
    }

    fn push(&mut self, command: DrawCommand) {
        self.add_labeled_shape(
            command.label,
            command.shape,
            command.transform,
            command.cache_key,
        );
    }
}

/// A surface that only records what was drawn. Used to inspect draw order without
/// rasterizing.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    size: (u32, u32),
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            size: (width, height),
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn labels(&self) -> Vec<&'static str> {
        self.commands.iter().map(|command| command.label).collect()
    }

    /// Position of the first command with `label`.
    pub fn position_of(&self, label: &str) -> Option<usize> {
        self.commands
            .iter()
            .position(|command| command.label == label)
    }

    /// Where the local origin of the first command with `label` lands on the surface.
    pub fn origin_of(&self, label: &str) -> Option<Point> {
        self.commands
            .iter()
            .find(|command| command.label == label)
            .map(|command| command.transform.transform_point(point(0.0, 0.0)))
    }
}

impl DrawSurface for RecordingSurface {
    fn size(&self) -> (u32, u32) {
        self.size
    }

    fn clear(&mut self) {
        self.commands.clear();
    }

    fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }
}
