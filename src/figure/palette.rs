//! Colors of the figure, shared by both rendering strategies.

use crate::Color;

pub const COAT: Color = Color::hex(0xFFFFFF);
pub const COAT_SHADE: Color = Color::hex(0xE0E0E0);
pub const COAT_MID: Color = Color::hex(0xF5F5F5);
pub const HOOF: Color = Color::hex(0x333333);

pub const GOLD_LIGHT: Color = Color::hex(0xFFE082);
pub const GOLD_DARK: Color = Color::hex(0xFFB300);
pub const TAIL_OUTLINE: Color = Color::hex(0xF57F17);

pub const EYE: Color = Color::hex(0xFF3D00);

pub const HORN_BASE: Color = Color::hex(0xFFD54F);
pub const HORN_MID: Color = Color::hex(0xFFF176);
pub const HORN_TIP: Color = Color::hex(0xFF6F00);
pub const HORN_OUTLINE: Color = Color::hex(0xFFA000);

pub const CAT_FUR: Color = Color::hex(0x616161);
pub const CAT_CHEST: Color = Color::hex(0xF5F5F5);
pub const BANDANA: Color = Color::hex(0xD50000);

pub const POLE: Color = Color::hex(0x795548);
pub const FLAG_RED: Color = Color::hex(0xF25022);
pub const FLAG_GREEN: Color = Color::hex(0x7FBA00);
pub const FLAG_BLUE: Color = Color::hex(0x00A4EF);
pub const FLAG_YELLOW: Color = Color::hex(0xFFB900);

pub const FIRE_CORE: Color = Color::rgb(255, 255, 0);
pub const FIRE_MID: Color = Color::rgb(255, 100, 0);
pub const FIRE_EDGE: Color = Color::rgba(255, 0, 0, 0);
