//! Glyph tables: identity to (attribute, character) lookups for every drawable layer.
//!
//! Tables are assembled once through [`GlyphTablesBuilder`], which rejects
//! incomplete or ambiguous data. After a successful build every lookup is
//! infallible for ids handed out by the same tables.
use bitflags::bitflags;
use strum::EnumCount;

use super::TableError;
use crate::display::{Glyph, RaceGlyph};
use crate::state::{FeatureId, Lighting, ObjectKindId, RaceId, TrapKindId};

/// Read-only access to the glyph tables used by the renderer.
pub trait GlyphOracle: Send + Sync {
    /// # Panics
    ///
    /// Panics if `id` was not issued by these tables.
    fn feature(&self, id: FeatureId) -> &FeatureInfo;

    fn feature_glyph(&self, lighting: Lighting, id: FeatureId) -> Glyph;

    fn trap_glyph(&self, lighting: Lighting, kind: TrapKindId) -> Glyph;

    /// # Panics
    ///
    /// Panics if `id` was not issued by these tables.
    fn race(&self, id: RaceId) -> &RaceInfo;

    /// Race used to draw the player.
    fn player_race(&self) -> &RaceInfo;

    fn object_kind_count(&self) -> usize;

    /// Glyph of an object kind; `None` for kinds that are never displayed.
    fn object_glyph(&self, kind: ObjectKindId) -> Option<Glyph>;

    /// Glyph shown for a stack of several objects.
    fn pile_glyph(&self) -> Glyph;
}

bitflags! {
    /// Display behaviour of a monster race.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct RaceFlags: u8 {
        /// Picks a new colour from the shimmer palette every frame.
        const ATTR_MULTI   = 1 << 0;
        /// Alternates between its colour and a lighter shade.
        const ATTR_FLICKER = 1 << 1;
        /// Takes the colour of whatever it stands on.
        const ATTR_CLEAR   = 1 << 2;
        /// Takes the character of whatever it stands on.
        const CHAR_CLEAR   = 1 << 3;
    }
}

impl RaceFlags {
    /// Races whose drawn colour changes from frame to frame.
    pub const fn is_animated(self) -> bool {
        self.intersects(Self::ATTR_MULTI.union(Self::ATTR_FLICKER))
    }

    pub const fn is_transparent(self) -> bool {
        self.intersects(Self::ATTR_CLEAR.union(Self::CHAR_CLEAR))
    }
}

/// Terrain feature metadata.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FeatureInfo {
    pub name: String,
    /// Overview priority; higher wins a shared bucket.
    pub priority: u8,
    /// Glows: brightened under torchlight, dimmed when remembered.
    pub light_source: bool,
    /// Receives the wall background tint in text mode.
    pub wall: bool,
}

impl FeatureInfo {
    pub fn new(name: impl Into<String>, priority: u8) -> Self {
        Self {
            name: name.into(),
            priority,
            light_source: false,
            wall: false,
        }
    }

    #[must_use]
    pub fn with_light_source(mut self, light_source: bool) -> Self {
        self.light_source = light_source;
        self
    }

    #[must_use]
    pub fn with_wall(mut self, wall: bool) -> Self {
        self.wall = wall;
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrapInfo {
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObjectKindInfo {
    pub name: String,
    pub glyph: Option<Glyph>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RaceInfo {
    pub name: String,
    pub glyph: RaceGlyph,
    #[cfg_attr(feature = "serde", serde(default))]
    pub flags: RaceFlags,
}

impl RaceInfo {
    pub fn new(name: impl Into<String>, glyph: RaceGlyph) -> Self {
        Self {
            name: name.into(),
            glyph,
            flags: RaceFlags::empty(),
        }
    }

    #[must_use]
    pub fn with_flags(mut self, flags: RaceFlags) -> Self {
        self.flags = flags;
        self
    }
}

/// One glyph per lighting state, possibly incomplete while tables are being built.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LightingGlyphs {
    slots: [Option<Glyph>; Lighting::COUNT],
}

impl LightingGlyphs {
    /// Same glyph under every lighting state.
    pub const fn uniform(glyph: Glyph) -> Self {
        Self {
            slots: [Some(glyph); Lighting::COUNT],
        }
    }

    #[must_use]
    pub const fn with(mut self, lighting: Lighting, glyph: Glyph) -> Self {
        self.slots[lighting.index()] = Some(glyph);
        self
    }

    fn complete(self) -> Result<[Glyph; Lighting::COUNT], Lighting> {
        let mut glyphs = [Glyph::BLANK; Lighting::COUNT];
        for (index, slot) in self.slots.iter().enumerate() {
            match slot {
                Some(glyph) => glyphs[index] = *glyph,
                None => return Err(LIGHTING_ORDER[index]),
            }
        }
        Ok(glyphs)
    }
}

const LIGHTING_ORDER: [Lighting; Lighting::COUNT] =
    [Lighting::Los, Lighting::Torch, Lighting::Lit, Lighting::Dark];

/// Validated glyph tables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GlyphTables {
    features: Vec<FeatureInfo>,
    feature_glyphs: Vec<[Glyph; Lighting::COUNT]>,
    traps: Vec<TrapInfo>,
    trap_glyphs: Vec<[Glyph; Lighting::COUNT]>,
    objects: Vec<ObjectKindInfo>,
    races: Vec<RaceInfo>,
    player_race: RaceId,
    pile: Glyph,
}

impl GlyphTables {
    pub fn builder() -> GlyphTablesBuilder {
        GlyphTablesBuilder::default()
    }

    pub fn feature_id(&self, name: &str) -> Option<FeatureId> {
        index_of(self.features.iter().map(|f| f.name.as_str()), name).map(FeatureId)
    }

    pub fn trap_id(&self, name: &str) -> Option<TrapKindId> {
        index_of(self.traps.iter().map(|t| t.name.as_str()), name).map(TrapKindId)
    }

    pub fn object_id(&self, name: &str) -> Option<ObjectKindId> {
        index_of(self.objects.iter().map(|o| o.name.as_str()), name).map(ObjectKindId)
    }

    pub fn race_id(&self, name: &str) -> Option<RaceId> {
        index_of(self.races.iter().map(|r| r.name.as_str()), name).map(RaceId)
    }

    pub fn player_race_id(&self) -> RaceId {
        self.player_race
    }

    pub fn feature_count(&self) -> usize {
        self.features.len()
    }

    pub fn race_count(&self) -> usize {
        self.races.len()
    }
}

fn index_of<'a>(mut names: impl Iterator<Item = &'a str>, name: &str) -> Option<u16> {
    names.position(|candidate| candidate == name).map(|index| index as u16)
}

impl GlyphOracle for GlyphTables {
    fn feature(&self, id: FeatureId) -> &FeatureInfo {
        &self.features[id.index()]
    }

    fn feature_glyph(&self, lighting: Lighting, id: FeatureId) -> Glyph {
        self.feature_glyphs[id.index()][lighting.index()]
    }

    fn trap_glyph(&self, lighting: Lighting, kind: TrapKindId) -> Glyph {
        self.trap_glyphs[kind.index()][lighting.index()]
    }

    fn race(&self, id: RaceId) -> &RaceInfo {
        &self.races[id.index()]
    }

    fn player_race(&self) -> &RaceInfo {
        &self.races[self.player_race.index()]
    }

    fn object_kind_count(&self) -> usize {
        self.objects.len()
    }

    fn object_glyph(&self, kind: ObjectKindId) -> Option<Glyph> {
        self.objects.get(kind.index()).and_then(|object| object.glyph)
    }

    fn pile_glyph(&self) -> Glyph {
        self.pile
    }
}

/// Accumulates glyph table entries and validates them in [`build`](Self::build).
#[derive(Clone, Debug)]
pub struct GlyphTablesBuilder {
    features: Vec<(FeatureInfo, LightingGlyphs)>,
    traps: Vec<(TrapInfo, LightingGlyphs)>,
    objects: Vec<ObjectKindInfo>,
    races: Vec<RaceInfo>,
    player_race: Option<RaceId>,
    pile: Glyph,
}

impl Default for GlyphTablesBuilder {
    fn default() -> Self {
        Self {
            features: Vec::new(),
            traps: Vec::new(),
            objects: Vec::new(),
            races: Vec::new(),
            player_race: None,
            pile: Glyph::text(crate::display::Color::Violet, '&'),
        }
    }
}

impl GlyphTablesBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_feature(&mut self, info: FeatureInfo, glyphs: LightingGlyphs) -> FeatureId {
        self.features.push((info, glyphs));
        FeatureId((self.features.len() - 1) as u16)
    }

    pub fn add_trap(&mut self, info: TrapInfo, glyphs: LightingGlyphs) -> TrapKindId {
        self.traps.push((info, glyphs));
        TrapKindId((self.traps.len() - 1) as u16)
    }

    pub fn add_object(&mut self, info: ObjectKindInfo) -> ObjectKindId {
        self.objects.push(info);
        ObjectKindId((self.objects.len() - 1) as u16)
    }

    pub fn add_race(&mut self, info: RaceInfo) -> RaceId {
        self.races.push(info);
        RaceId((self.races.len() - 1) as u16)
    }

    pub fn player_race(&mut self, id: RaceId) -> &mut Self {
        self.player_race = Some(id);
        self
    }

    pub fn pile(&mut self, glyph: Glyph) -> &mut Self {
        self.pile = glyph;
        self
    }

    /// Validates and freezes the tables.
    ///
    /// # Errors
    ///
    /// Returns [`TableError`] if a table overflows its id space, a name repeats
    /// within a table, a feature or trap lacks a glyph for some lighting state,
    /// or the player race is unset or unknown.
    pub fn build(self) -> Result<GlyphTables, TableError> {
        check_names("feature", self.features.iter().map(|(f, _)| f.name.as_str()))?;
        check_names("trap", self.traps.iter().map(|(t, _)| t.name.as_str()))?;
        check_names("object", self.objects.iter().map(|o| o.name.as_str()))?;
        check_names("race", self.races.iter().map(|r| r.name.as_str()))?;

        let player_race = self.player_race.ok_or(TableError::MissingPlayerRace)?;
        if player_race.index() >= self.races.len() {
            return Err(TableError::UnknownPlayerRace(player_race));
        }

        let (features, feature_glyphs) = complete_glyphs("feature", self.features, |f| &f.name)?;
        let (traps, trap_glyphs) = complete_glyphs("trap", self.traps, |t| &t.name)?;

        Ok(GlyphTables {
            features,
            feature_glyphs,
            traps,
            trap_glyphs,
            objects: self.objects,
            races: self.races,
            player_race,
            pile: self.pile,
        })
    }
}

fn check_names<'a>(
    table: &'static str,
    names: impl ExactSizeIterator<Item = &'a str>,
) -> Result<(), TableError> {
    if names.len() > usize::from(u16::MAX) {
        return Err(TableError::TooManyEntries {
            table,
            count: names.len(),
        });
    }
    let mut seen = std::collections::HashSet::new();
    for name in names {
        if !seen.insert(name) {
            return Err(TableError::DuplicateName {
                table,
                name: name.to_owned(),
            });
        }
    }
    Ok(())
}

type Completed<T> = (Vec<T>, Vec<[Glyph; Lighting::COUNT]>);

fn complete_glyphs<T>(
    table: &'static str,
    entries: Vec<(T, LightingGlyphs)>,
    name: impl Fn(&T) -> &String,
) -> Result<Completed<T>, TableError> {
    let mut infos = Vec::with_capacity(entries.len());
    let mut glyphs = Vec::with_capacity(entries.len());
    for (info, lit) in entries {
        let complete = lit
            .complete()
            .map_err(|lighting| TableError::MissingLightingGlyph {
                table,
                name: name(&info).clone(),
                lighting,
            })?;
        infos.push(info);
        glyphs.push(complete);
    }
    Ok((infos, glyphs))
}
