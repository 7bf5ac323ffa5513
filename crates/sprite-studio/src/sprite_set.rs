//! The editable sprite set: an ordered collection with a selection.

use format_laser_sprites::{MAX_SPRITES, Sprite};

/// Default dimensions for a newly added sprite, in character cells.
const NEW_SPRITE_CELLS: u8 = 2;

/// Ordered sprite collection with a current selection.
///
/// Order is load/display order on the target machine. The selection
/// follows the conventions a list editor needs: deleting selects the
/// previous entry, moving an entry keeps it selected.
pub struct SpriteSet {
    sprites: Vec<Sprite>,
    selected: Option<usize>,
}

impl SpriteSet {
    /// Create an empty set with nothing selected.
    #[must_use]
    pub fn new() -> Self {
        Self {
            sprites: Vec::new(),
            selected: None,
        }
    }

    /// Create a set from decoded sprites, selecting the first.
    #[must_use]
    pub fn from_sprites(sprites: Vec<Sprite>) -> Self {
        let selected = if sprites.is_empty() { None } else { Some(0) };
        Self { sprites, selected }
    }

    /// The sprites, in order.
    #[must_use]
    pub fn sprites(&self) -> &[Sprite] {
        &self.sprites
    }

    /// Number of sprites in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }

    /// Index of the selected sprite, if any.
    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// The selected sprite.
    #[must_use]
    pub fn selected(&self) -> Option<&Sprite> {
        self.selected.map(|i| &self.sprites[i])
    }

    /// Mutable access to the selected sprite.
    pub fn selected_mut(&mut self) -> Option<&mut Sprite> {
        self.selected.map(|i| &mut self.sprites[i])
    }

    /// Select the sprite at `index`. Out-of-range indices fall back to
    /// the first sprite; selecting in an empty set clears the selection.
    pub fn select(&mut self, index: usize) {
        if self.sprites.is_empty() {
            self.selected = None;
        } else if index < self.sprites.len() {
            self.selected = Some(index);
        } else {
            self.selected = Some(0);
        }
    }

    /// Append a blank 2×2 sprite and select it.
    ///
    /// Returns false (and changes nothing) once the set holds
    /// [`MAX_SPRITES`] entries.
    pub fn add(&mut self) -> bool {
        if self.sprites.len() >= MAX_SPRITES {
            return false;
        }
        self.sprites
            .push(Sprite::new(NEW_SPRITE_CELLS, NEW_SPRITE_CELLS));
        self.selected = Some(self.sprites.len() - 1);
        true
    }

    /// Remove the selected sprite. Selection moves to the previous
    /// entry, or clears if the set becomes empty.
    pub fn delete_selected(&mut self) {
        let Some(index) = self.selected else {
            return;
        };
        self.sprites.remove(index);
        if self.sprites.is_empty() {
            self.selected = None;
        } else {
            self.selected = Some(index.saturating_sub(1));
        }
    }

    /// Replace the selected sprite with a blank one of the given
    /// dimensions.
    pub fn resize_selected(&mut self, width: u8, height: u8) {
        if let Some(index) = self.selected {
            self.sprites[index] = Sprite::new(width, height);
        }
    }

    /// Swap the selected sprite with its predecessor, keeping it
    /// selected. No-op for the first entry.
    pub fn move_up(&mut self) {
        if let Some(index) = self.selected
            && index > 0
        {
            self.sprites.swap(index - 1, index);
            self.selected = Some(index - 1);
        }
    }

    /// Swap the selected sprite with its successor, keeping it
    /// selected. No-op for the last entry.
    pub fn move_down(&mut self) {
        if let Some(index) = self.selected
            && index + 1 < self.sprites.len()
        {
            self.sprites.swap(index, index + 1);
            self.selected = Some(index + 1);
        }
    }
}

impl Default for SpriteSet {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_set() {
        let set = SpriteSet::new();
        assert!(set.is_empty());
        assert_eq!(set.selected_index(), None);
        assert!(set.selected().is_none());
    }

    #[test]
    fn add_selects_new_sprite() {
        let mut set = SpriteSet::new();
        assert!(set.add());
        assert!(set.add());
        assert_eq!(set.len(), 2);
        assert_eq!(set.selected_index(), Some(1));
        let sprite = set.selected().expect("selected");
        assert_eq!(sprite.width(), 2);
        assert_eq!(sprite.height(), 2);
    }

    #[test]
    fn add_stops_at_capacity() {
        let mut set = SpriteSet::new();
        for _ in 0..MAX_SPRITES {
            assert!(set.add());
        }
        assert!(!set.add());
        assert_eq!(set.len(), MAX_SPRITES);
    }

    #[test]
    fn delete_selects_previous() {
        let mut set = SpriteSet::new();
        set.add();
        set.add();
        set.add();
        set.select(1);
        set.delete_selected();
        assert_eq!(set.len(), 2);
        assert_eq!(set.selected_index(), Some(0));
    }

    #[test]
    fn delete_last_clears_selection() {
        let mut set = SpriteSet::new();
        set.add();
        set.delete_selected();
        assert!(set.is_empty());
        assert_eq!(set.selected_index(), None);
        // A second delete is a no-op.
        set.delete_selected();
    }

    #[test]
    fn select_clamps_out_of_range_to_first() {
        let mut set = SpriteSet::new();
        set.add();
        set.add();
        set.select(9);
        assert_eq!(set.selected_index(), Some(0));
    }

    #[test]
    fn resize_replaces_with_blank() {
        let mut set = SpriteSet::new();
        set.add();
        set.selected_mut().expect("selected").set_pixel(0, 0, 1);
        set.resize_selected(3, 1);
        let sprite = set.selected().expect("selected");
        assert_eq!(sprite.width(), 3);
        assert_eq!(sprite.height(), 1);
        assert_eq!(sprite.pixel(0, 0), 0);
    }

    #[test]
    fn moves_follow_the_sprite() {
        let mut set = SpriteSet::new();
        set.add();
        set.add();
        set.resize_selected(4, 4); // make sprite 1 recognisable
        set.move_up();
        assert_eq!(set.selected_index(), Some(0));
        assert_eq!(set.sprites()[0].width(), 4);

        set.move_up(); // already first: no-op
        assert_eq!(set.selected_index(), Some(0));

        set.move_down();
        assert_eq!(set.selected_index(), Some(1));
        assert_eq!(set.sprites()[1].width(), 4);

        set.move_down(); // already last: no-op
        assert_eq!(set.selected_index(), Some(1));
    }
}
