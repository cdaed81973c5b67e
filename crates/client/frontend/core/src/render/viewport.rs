//! Viewports: how a display surface looks onto the world.

use arrayvec::ArrayVec;
use bitflags::bitflags;
use game_core::{ErrorSeverity, GameError, Position, TileMultiplier};

use crate::surface::{DevicePoint, DisplaySurface, Extent};

/// What a viewport shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ViewportRole {
    /// The primary 1:1 map view.
    MainView,
    /// A secondary 1:1 view with its own scroll and tile factor.
    MirrorPanel,
    /// A scaled-down view of the whole level.
    OverviewPanel,
}

bitflags! {
    /// Per-viewport display switches.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct ViewportFlags: u8 {
        /// The viewport shows the map; secondaries without it are left alone.
        const SHOW_MAP     = 1 << 0;
        /// The bottom row may be drawn on. Otherwise it is kept for prompts.
        const USE_LAST_ROW = 1 << 1;
    }
}

/// Geometry of one viewport. Owned by the caller and handed in per render call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub role: ViewportRole,
    pub flags: ViewportFlags,
    /// Device cell where world cell `scroll` is drawn.
    pub origin: DevicePoint,
    /// World position shown at `origin`.
    pub scroll: Position,
    pub tile: TileMultiplier,
}

impl Viewport {
    pub fn main(origin: DevicePoint, tile: TileMultiplier) -> Self {
        Self {
            role: ViewportRole::MainView,
            flags: ViewportFlags::SHOW_MAP,
            origin,
            scroll: Position::ORIGIN,
            tile,
        }
    }

    pub fn mirror(tile: TileMultiplier) -> Self {
        Self {
            role: ViewportRole::MirrorPanel,
            flags: ViewportFlags::SHOW_MAP | ViewportFlags::USE_LAST_ROW,
            origin: DevicePoint::ORIGIN,
            scroll: Position::ORIGIN,
            tile,
        }
    }

    pub fn overview(tile: TileMultiplier) -> Self {
        Self {
            role: ViewportRole::OverviewPanel,
            flags: ViewportFlags::SHOW_MAP | ViewportFlags::USE_LAST_ROW,
            origin: DevicePoint::ORIGIN,
            scroll: Position::ORIGIN,
            tile,
        }
    }

    #[must_use]
    pub fn with_flags(mut self, flags: ViewportFlags) -> Self {
        self.flags = flags;
        self
    }

    #[must_use]
    pub fn with_scroll(mut self, scroll: Position) -> Self {
        self.scroll = scroll;
        self
    }

    pub fn shows_map(&self) -> bool {
        self.flags.contains(ViewportFlags::SHOW_MAP)
    }

    /// Number of surface rows the map may draw on.
    pub fn clip_rows(&self, size: Extent) -> u16 {
        if self.flags.contains(ViewportFlags::USE_LAST_ROW) {
            size.height
        } else {
            size.height.saturating_sub(1)
        }
    }

    /// How many whole world cells fit on a surface of `size`.
    pub fn visible_cells(&self, size: Extent) -> Extent {
        let width = size.width.saturating_sub(self.origin.x) / u16::from(self.tile.width());
        let height =
            self.clip_rows(size).saturating_sub(self.origin.y) / u16::from(self.tile.height());
        Extent::new(width, height)
    }

    /// Device cell of `position` in this 1:1 viewport, or `None` when it is scrolled out.
    pub fn device_point(&self, position: Position, size: Extent) -> Option<DevicePoint> {
        let visible = self.visible_cells(size);
        let rel_x = position.x.checked_sub(self.scroll.x)?;
        let rel_y = position.y.checked_sub(self.scroll.y)?;
        if rel_x < 0
            || rel_y < 0
            || rel_x >= i32::from(visible.width)
            || rel_y >= i32::from(visible.height)
        {
            return None;
        }
        Some(DevicePoint::new(
            self.origin.x + rel_x as u16 * u16::from(self.tile.width()),
            self.origin.y + rel_y as u16 * u16::from(self.tile.height()),
        ))
    }

    /// Scrolls so `position` sits in the middle of the visible area.
    pub fn center_on(&mut self, position: Position, size: Extent) {
        let visible = self.visible_cells(size);
        self.scroll = Position::new(
            position.x - i32::from(visible.width) / 2,
            position.y - i32::from(visible.height) / 2,
        );
    }
}

/// A viewport paired with the surface it draws on for the duration of one call.
pub struct ViewportTarget<'s> {
    pub viewport: Viewport,
    pub surface: &'s mut dyn DisplaySurface,
}

impl<'s> ViewportTarget<'s> {
    pub fn new(viewport: Viewport, surface: &'s mut dyn DisplaySurface) -> Self {
        Self { viewport, surface }
    }
}

impl std::fmt::Debug for ViewportTarget<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewportTarget")
            .field("viewport", &self.viewport)
            .field("size", &self.surface.size())
            .finish()
    }
}

const MAX_SECONDARY_VIEWPORTS: usize = 7;

/// Registry of the viewports active for one render call.
#[derive(Debug)]
pub struct ViewportSet<'s> {
    main: ViewportTarget<'s>,
    secondaries: ArrayVec<ViewportTarget<'s>, MAX_SECONDARY_VIEWPORTS>,
}

impl<'s> ViewportSet<'s> {
    pub const MAX_SECONDARIES: usize = MAX_SECONDARY_VIEWPORTS;

    /// # Errors
    ///
    /// Returns [`ViewportError::MainRole`] if `main` is not a main view.
    pub fn new(main: ViewportTarget<'s>) -> Result<Self, ViewportError> {
        if main.viewport.role != ViewportRole::MainView {
            return Err(ViewportError::MainRole(main.viewport.role));
        }
        Ok(Self {
            main,
            secondaries: ArrayVec::new(),
        })
    }

    /// Registers a mirror or overview panel.
    ///
    /// # Errors
    ///
    /// Returns [`ViewportError::SecondaryRole`] for a second main view and
    /// [`ViewportError::TooManySecondaries`] once all slots are taken.
    pub fn push(&mut self, target: ViewportTarget<'s>) -> Result<(), ViewportError> {
        if target.viewport.role == ViewportRole::MainView {
            return Err(ViewportError::SecondaryRole);
        }
        self.secondaries
            .try_push(target)
            .map_err(|_| ViewportError::TooManySecondaries {
                max: Self::MAX_SECONDARIES,
            })
    }

    pub fn with(mut self, target: ViewportTarget<'s>) -> Result<Self, ViewportError> {
        self.push(target)?;
        Ok(self)
    }

    pub fn main(&mut self) -> &mut ViewportTarget<'s> {
        &mut self.main
    }

    pub fn secondaries(&mut self) -> impl Iterator<Item = &mut ViewportTarget<'s>> {
        self.secondaries.iter_mut()
    }

    pub fn secondary_count(&self) -> usize {
        self.secondaries.len()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ViewportError {
    #[error("main viewport must have the main view role, got {0:?}")]
    MainRole(ViewportRole),

    #[error("only one main view may be registered")]
    SecondaryRole,

    #[error("at most {max} secondary viewports can be registered")]
    TooManySecondaries { max: usize },
}

impl GameError for ViewportError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::MainRole(_) => "VIEWPORT_MAIN_ROLE",
            Self::SecondaryRole => "VIEWPORT_SECONDARY_ROLE",
            Self::TooManySecondaries { .. } => "VIEWPORT_TOO_MANY_SECONDARIES",
        }
    }
}
