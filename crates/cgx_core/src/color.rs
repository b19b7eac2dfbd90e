//! RGB, CMYK and HSV color spaces
//!
//! All components are fractions in [0, 1]. Hue is a fraction of a full turn,
//! so 0.5 is cyan (180°).

use serde::{Deserialize, Serialize};

fn max3(a: f64, b: f64, c: f64) -> f64 {
    a.max(b).max(c)
}

fn min3(a: f64, b: f64, c: f64) -> f64 {
    a.min(b).min(c)
}

/// Red, green, blue
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// Cyan, magenta, yellow, black
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Cmyk {
    pub c: f64,
    pub m: f64,
    pub y: f64,
    pub k: f64,
}

/// Hue, saturation, value
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);

    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Each component clamped to [0, 1]
    pub fn clamped(self) -> Self {
        Self::new(self.r.clamp(0.0, 1.0), self.g.clamp(0.0, 1.0), self.b.clamp(0.0, 1.0))
    }

    /// K is the distance of the brightest channel from 1; C, M and Y are
    /// each channel's shortfall relative to that channel. Black maps to
    /// C = M = Y = 0, K = 1.
    pub fn to_cmyk(self) -> Cmyk {
        let max = max3(self.r, self.g, self.b);
        let k = 1.0 - max;
        if max == 0.0 {
            return Cmyk::new(0.0, 0.0, 0.0, k);
        }
        Cmyk::new(
            (max - self.r) / max,
            (max - self.g) / max,
            (max - self.b) / max,
            k,
        )
    }

    /// Six-sector hue. Grays (including black) get S = H = 0.
    pub fn to_hsv(self) -> Hsv {
        let max = max3(self.r, self.g, self.b);
        let min = min3(self.r, self.g, self.b);
        let delta = max - min;

        if max == 0.0 || delta == 0.0 {
            return Hsv::new(0.0, 0.0, max);
        }

        let sector = if self.r == max {
            // between yellow and magenta
            (self.g - self.b) / delta
        } else if self.g == max {
            // between cyan and yellow
            2.0 + (self.b - self.r) / delta
        } else {
            // between magenta and cyan
            4.0 + (self.r - self.g) / delta
        };
        let mut h = sector / 6.0;
        if h < 0.0 {
            h += 1.0;
        }
        Hsv::new(h, delta / max, max)
    }

    /// Largest absolute component difference to `other`
    pub fn max_abs_diff(self, other: Self) -> f64 {
        (self.r - other.r)
            .abs()
            .max((self.g - other.g).abs())
            .max((self.b - other.b).abs())
    }
}

impl Cmyk {
    pub const fn new(c: f64, m: f64, y: f64, k: f64) -> Self {
        Self { c, m, y, k }
    }

    pub fn to_rgb(self) -> Rgb {
        Rgb::new(
            (1.0 - self.k) * (1.0 - self.c),
            (1.0 - self.k) * (1.0 - self.m),
            (1.0 - self.k) * (1.0 - self.y),
        )
    }
}

impl Hsv {
    pub const fn new(h: f64, s: f64, v: f64) -> Self {
        Self { h, s, v }
    }

    /// A hue of 1 (or more) is the same as 0
    pub fn to_rgb(self) -> Rgb {
        let h6 = if self.h >= 1.0 { 0.0 } else { 6.0 * self.h };
        let sector = h6.trunc();
        let f = h6 - sector;
        let v = self.v;
        let p = v * (1.0 - self.s);
        let q = v * (1.0 - self.s * f);
        let t = v * (1.0 - self.s * (1.0 - f));

        match sector as i32 {
            0 => Rgb::new(v, t, p),
            1 => Rgb::new(q, v, p),
            2 => Rgb::new(p, v, t),
            3 => Rgb::new(p, q, v),
            4 => Rgb::new(t, p, v),
            _ => Rgb::new(v, p, q),
        }
    }
}

impl From<Rgb> for Cmyk {
    fn from(rgb: Rgb) -> Self {
        rgb.to_cmyk()
    }
}

impl From<Rgb> for Hsv {
    fn from(rgb: Rgb) -> Self {
        rgb.to_hsv()
    }
}

impl From<Cmyk> for Rgb {
    fn from(cmyk: Cmyk) -> Self {
        cmyk.to_rgb()
    }
}

impl From<Hsv> for Rgb {
    fn from(hsv: Hsv) -> Self {
        hsv.to_rgb()
    }
}

/// Color space a [`Component`] belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Space {
    Rgb,
    Cmyk,
    Hsv,
}

/// One editable color component
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Component {
    R,
    G,
    B,
    C,
    M,
    Y,
    K,
    H,
    S,
    V,
}

impl Component {
    /// Editing order: RGB, then CMYK, then HSV
    pub const ALL: [Component; 10] = [
        Component::R,
        Component::G,
        Component::B,
        Component::C,
        Component::M,
        Component::Y,
        Component::K,
        Component::H,
        Component::S,
        Component::V,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn space(self) -> Space {
        match self {
            Component::R | Component::G | Component::B => Space::Rgb,
            Component::C | Component::M | Component::Y | Component::K => Space::Cmyk,
            Component::H | Component::S | Component::V => Space::Hsv,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Component::R => "R",
            Component::G => "G",
            Component::B => "B",
            Component::C => "C",
            Component::M => "M",
            Component::Y => "Y",
            Component::K => "K",
            Component::H => "H",
            Component::S => "S",
            Component::V => "V",
        }
    }

    fn offset(self, by: isize) -> Self {
        let n = Self::ALL.len() as isize;
        Self::ALL[(self.index() as isize + by).rem_euclid(n) as usize]
    }
}

/// One scripted edit: add `delta` to `component`
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColorEdit {
    pub component: Component,
    pub delta: f64,
}

/// A color held in all three spaces at once
///
/// Editing a component clamps it to [0, 1] and re-derives the other two
/// spaces from the one that changed. The edited space is left exactly as
/// edited, so e.g. CMYK values that no RGB color maps back to stay visible
/// until an RGB or HSV edit replaces them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorEditor {
    rgb: Rgb,
    cmyk: Cmyk,
    hsv: Hsv,
    selected: Component,
}

impl Default for ColorEditor {
    fn default() -> Self {
        Self::new(Rgb::WHITE)
    }
}

impl ColorEditor {
    /// Step applied by one arrow-key press
    pub const STEP: f64 = 0.01;

    pub fn new(rgb: Rgb) -> Self {
        let rgb = rgb.clamped();
        Self {
            rgb,
            cmyk: rgb.to_cmyk(),
            hsv: rgb.to_hsv(),
            selected: Component::R,
        }
    }

    pub fn rgb(&self) -> Rgb {
        self.rgb
    }

    pub fn cmyk(&self) -> Cmyk {
        self.cmyk
    }

    pub fn hsv(&self) -> Hsv {
        self.hsv
    }

    pub fn selected(&self) -> Component {
        self.selected
    }

    pub fn select(&mut self, component: Component) {
        self.selected = component;
    }

    /// Move the selection down the list, wrapping from V to R
    pub fn select_next(&mut self) {
        self.selected = self.selected.offset(1);
    }

    /// Move the selection up the list, wrapping from R to V
    pub fn select_previous(&mut self) {
        self.selected = self.selected.offset(-1);
    }

    pub fn get(&self, component: Component) -> f64 {
        match component {
            Component::R => self.rgb.r,
            Component::G => self.rgb.g,
            Component::B => self.rgb.b,
            Component::C => self.cmyk.c,
            Component::M => self.cmyk.m,
            Component::Y => self.cmyk.y,
            Component::K => self.cmyk.k,
            Component::H => self.hsv.h,
            Component::S => self.hsv.s,
            Component::V => self.hsv.v,
        }
    }

    /// Add `delta` to the selected component
    pub fn adjust(&mut self, delta: f64) {
        let component = self.selected;
        self.set(component, self.get(component) + delta);
    }

    /// Apply a scripted edit to its component, selecting it
    pub fn apply(&mut self, edit: ColorEdit) {
        self.selected = edit.component;
        self.adjust(edit.delta);
    }

    /// Set one component (clamped) and re-derive the other spaces
    pub fn set(&mut self, component: Component, value: f64) {
        let value = value.clamp(0.0, 1.0);
        match component {
            Component::R => self.rgb.r = value,
            Component::G => self.rgb.g = value,
            Component::B => self.rgb.b = value,
            Component::C => self.cmyk.c = value,
            Component::M => self.cmyk.m = value,
            Component::Y => self.cmyk.y = value,
            Component::K => self.cmyk.k = value,
            Component::H => self.hsv.h = value,
            Component::S => self.hsv.s = value,
            Component::V => self.hsv.v = value,
        }

        match component.space() {
            Space::Rgb => {
                self.cmyk = self.rgb.to_cmyk();
                self.hsv = self.rgb.to_hsv();
            }
            Space::Cmyk => {
                self.rgb = self.cmyk.to_rgb();
                self.hsv = self.rgb.to_hsv();
            }
            Space::Hsv => {
                self.rgb = self.hsv.to_rgb();
                self.cmyk = self.rgb.to_cmyk();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    #[test]
    fn test_primaries_to_hsv() {
        let red = Rgb::new(1.0, 0.0, 0.0).to_hsv();
        assert_eq!(red, Hsv::new(0.0, 1.0, 1.0));

        let green = Rgb::new(0.0, 1.0, 0.0).to_hsv();
        assert!(close(green.h, 1.0 / 3.0));

        let blue = Rgb::new(0.0, 0.0, 1.0).to_hsv();
        assert!(close(blue.h, 2.0 / 3.0));
    }

    #[test]
    fn test_hue_wraps_to_positive() {
        // Magenta-leaning red: R max with B > G gives a negative sector
        let hsv = Rgb::new(1.0, 0.0, 0.5).to_hsv();
        assert!(hsv.h > 0.9 && hsv.h < 1.0);
        assert!(close(hsv.h, 1.0 - 0.5 / 6.0));
    }

    #[test]
    fn test_black_is_degenerate() {
        let black = Rgb::BLACK;
        assert_eq!(black.to_cmyk(), Cmyk::new(0.0, 0.0, 0.0, 1.0));
        assert_eq!(black.to_hsv(), Hsv::new(0.0, 0.0, 0.0));
        assert_eq!(Hsv::new(0.0, 0.0, 0.0).to_rgb(), Rgb::BLACK);
    }

    #[test]
    fn test_gray_has_no_hue() {
        let hsv = Rgb::new(0.4, 0.4, 0.4).to_hsv();
        assert_eq!(hsv, Hsv::new(0.0, 0.0, 0.4));
    }

    #[test]
    fn test_cmyk_of_white_and_red() {
        assert_eq!(Rgb::WHITE.to_cmyk(), Cmyk::new(0.0, 0.0, 0.0, 0.0));
        assert_eq!(Rgb::new(1.0, 0.0, 0.0).to_cmyk(), Cmyk::new(0.0, 1.0, 1.0, 0.0));
    }

    #[test]
    fn test_round_trips_on_grid() {
        let steps = 11;
        for i in 0..steps {
            for j in 0..steps {
                for k in 0..steps {
                    let rgb = Rgb::new(
                        i as f64 / (steps - 1) as f64,
                        j as f64 / (steps - 1) as f64,
                        k as f64 / (steps - 1) as f64,
                    );
                    let via_cmyk = rgb.to_cmyk().to_rgb();
                    let via_hsv = rgb.to_hsv().to_rgb();
                    assert!(via_cmyk.max_abs_diff(rgb) < EPS, "CMYK round trip of {:?} gave {:?}", rgb, via_cmyk);
                    assert!(via_hsv.max_abs_diff(rgb) < EPS, "HSV round trip of {:?} gave {:?}", rgb, via_hsv);
                }
            }
        }
    }

    #[test]
    fn test_hue_of_one_is_red() {
        let rgb = Hsv::new(1.0, 1.0, 1.0).to_rgb();
        assert_eq!(rgb, Rgb::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_from_impls() {
        let rgb = Rgb::new(0.2, 0.6, 0.4);
        let cmyk: Cmyk = rgb.into();
        let hsv: Hsv = rgb.into();
        assert!(Rgb::from(cmyk).max_abs_diff(rgb) < EPS);
        assert!(Rgb::from(hsv).max_abs_diff(rgb) < EPS);
    }

    #[test]
    fn test_editor_starts_white() {
        let editor = ColorEditor::default();
        assert_eq!(editor.rgb(), Rgb::WHITE);
        assert_eq!(editor.cmyk(), Cmyk::new(0.0, 0.0, 0.0, 0.0));
        assert_eq!(editor.hsv(), Hsv::new(0.0, 0.0, 1.0));
        assert_eq!(editor.selected(), Component::R);
    }

    #[test]
    fn test_selection_wraps() {
        let mut editor = ColorEditor::default();
        editor.select_previous();
        assert_eq!(editor.selected(), Component::V);
        editor.select_next();
        assert_eq!(editor.selected(), Component::R);
        for _ in 0..10 {
            editor.select_next();
        }
        assert_eq!(editor.selected(), Component::R);
    }

    #[test]
    fn test_adjust_clamps() {
        let mut editor = ColorEditor::default();
        editor.adjust(ColorEditor::STEP);
        assert_eq!(editor.rgb().r, 1.0);

        editor.select(Component::G);
        editor.adjust(-5.0);
        assert_eq!(editor.rgb().g, 0.0);
    }

    #[test]
    fn test_rgb_edit_updates_cmyk_and_hsv() {
        let mut editor = ColorEditor::default();
        editor.select(Component::B);
        editor.adjust(-1.0);
        // Yellow
        assert_eq!(editor.rgb(), Rgb::new(1.0, 1.0, 0.0));
        assert_eq!(editor.cmyk(), Cmyk::new(0.0, 0.0, 1.0, 0.0));
        assert!(close(editor.hsv().h, 1.0 / 6.0));
        assert_eq!(editor.hsv().s, 1.0);
    }

    #[test]
    fn test_cmyk_edit_keeps_cmyk() {
        let mut editor = ColorEditor::default();
        editor.apply(ColorEdit { component: Component::K, delta: 0.5 });
        assert_eq!(editor.cmyk().k, 0.5);
        assert!(editor.rgb().max_abs_diff(Rgb::new(0.5, 0.5, 0.5)) < EPS);
        assert!(close(editor.hsv().v, 0.5));
        assert_eq!(editor.selected(), Component::K);
    }

    #[test]
    fn test_hsv_edit_updates_rgb_and_cmyk() {
        let mut editor = ColorEditor::default();
        editor.apply(ColorEdit { component: Component::S, delta: 1.0 });
        // Full saturation at hue 0 is red
        assert_eq!(editor.rgb(), Rgb::new(1.0, 0.0, 0.0));
        editor.apply(ColorEdit { component: Component::H, delta: 0.5 });
        assert!(editor.rgb().max_abs_diff(Rgb::new(0.0, 1.0, 1.0)) < EPS);
        assert_eq!(editor.cmyk(), Cmyk::new(1.0, 0.0, 0.0, 0.0));
        assert!(close(editor.hsv().h, 0.5));
    }

    #[test]
    fn test_views_stay_consistent() {
        let mut editor = ColorEditor::new(Rgb::new(0.3, 0.7, 0.2));
        let script = [
            ColorEdit { component: Component::R, delta: 0.25 },
            ColorEdit { component: Component::M, delta: 0.1 },
            ColorEdit { component: Component::H, delta: -0.2 },
            ColorEdit { component: Component::V, delta: -0.3 },
        ];
        for edit in script {
            editor.apply(edit);
            assert!(editor.cmyk().to_rgb().max_abs_diff(editor.rgb()) < EPS);
            assert!(editor.hsv().to_rgb().max_abs_diff(editor.rgb()) < EPS);
        }
    }

    #[test]
    fn test_component_metadata() {
        assert_eq!(Component::ALL.len(), 10);
        assert_eq!(Component::K.space(), Space::Cmyk);
        assert_eq!(Component::H.name(), "H");
        assert_eq!(Component::V.index(), 9);
    }
}
