//! Static color-name tables.
//!
//! Names are stored lower-case with an underscore between words, the same
//! form lookups normalize their input to.

use super::Rgb;

/// Named colors from the web/graphics naming convention (CSS Color Module Level 4).
pub(crate) const GENERAL_COLORS: &[(&str, Rgb)] = &[
    ("alice_blue", Rgb::new(0xf0, 0xf8, 0xff)),
    ("antique_white", Rgb::new(0xfa, 0xeb, 0xd7)),
    ("aqua", Rgb::new(0x00, 0xff, 0xff)),
    ("aquamarine", Rgb::new(0x7f, 0xff, 0xd4)),
    ("azure", Rgb::new(0xf0, 0xff, 0xff)),
    ("beige", Rgb::new(0xf5, 0xf5, 0xdc)),
    ("bisque", Rgb::new(0xff, 0xe4, 0xc4)),
    ("black", Rgb::new(0x00, 0x00, 0x00)),
    ("blanched_almond", Rgb::new(0xff, 0xeb, 0xcd)),
    ("blue", Rgb::new(0x00, 0x00, 0xff)),
    ("blue_violet", Rgb::new(0x8a, 0x2b, 0xe2)),
    ("brown", Rgb::new(0xa5, 0x2a, 0x2a)),
    ("burly_wood", Rgb::new(0xde, 0xb8, 0x87)),
    ("cadet_blue", Rgb::new(0x5f, 0x9e, 0xa0)),
    ("chartreuse", Rgb::new(0x7f, 0xff, 0x00)),
    ("chocolate", Rgb::new(0xd2, 0x69, 0x1e)),
    ("coral", Rgb::new(0xff, 0x7f, 0x50)),
    ("cornflower_blue", Rgb::new(0x64, 0x95, 0xed)),
    ("cornsilk", Rgb::new(0xff, 0xf8, 0xdc)),
    ("crimson", Rgb::new(0xdc, 0x14, 0x3c)),
    ("cyan", Rgb::new(0x00, 0xff, 0xff)),
    ("dark_blue", Rgb::new(0x00, 0x00, 0x8b)),
    ("dark_cyan", Rgb::new(0x00, 0x8b, 0x8b)),
    ("dark_goldenrod", Rgb::new(0xb8, 0x86, 0x0b)),
    ("dark_gray", Rgb::new(0xa9, 0xa9, 0xa9)),
    ("dark_green", Rgb::new(0x00, 0x64, 0x00)),
    ("dark_grey", Rgb::new(0xa9, 0xa9, 0xa9)),
    ("dark_khaki", Rgb::new(0xbd, 0xb7, 0x6b)),
    ("dark_magenta", Rgb::new(0x8b, 0x00, 0x8b)),
    ("dark_olive_green", Rgb::new(0x55, 0x6b, 0x2f)),
    ("dark_orange", Rgb::new(0xff, 0x8c, 0x00)),
    ("dark_orchid", Rgb::new(0x99, 0x32, 0xcc)),
    ("dark_red", Rgb::new(0x8b, 0x00, 0x00)),
    ("dark_salmon", Rgb::new(0xe9, 0x96, 0x7a)),
    ("dark_sea_green", Rgb::new(0x8f, 0xbc, 0x8f)),
    ("dark_slate_blue", Rgb::new(0x48, 0x3d, 0x8b)),
    ("dark_slate_gray", Rgb::new(0x2f, 0x4f, 0x4f)),
    ("dark_slate_grey", Rgb::new(0x2f, 0x4f, 0x4f)),
    ("dark_turquoise", Rgb::new(0x00, 0xce, 0xd1)),
    ("dark_violet", Rgb::new(0x94, 0x00, 0xd3)),
    ("deep_pink", Rgb::new(0xff, 0x14, 0x93)),
    ("deep_sky_blue", Rgb::new(0x00, 0xbf, 0xff)),
    ("dim_gray", Rgb::new(0x69, 0x69, 0x69)),
    ("dim_grey", Rgb::new(0x69, 0x69, 0x69)),
    ("dodger_blue", Rgb::new(0x1e, 0x90, 0xff)),
    ("fire_brick", Rgb::new(0xb2, 0x22, 0x22)),
    ("floral_white", Rgb::new(0xff, 0xfa, 0xf0)),
    ("forest_green", Rgb::new(0x22, 0x8b, 0x22)),
    ("fuchsia", Rgb::new(0xff, 0x00, 0xff)),
    ("gainsboro", Rgb::new(0xdc, 0xdc, 0xdc)),
    ("ghost_white", Rgb::new(0xf8, 0xf8, 0xff)),
    ("gold", Rgb::new(0xff, 0xd7, 0x00)),
    ("goldenrod", Rgb::new(0xda, 0xa5, 0x20)),
    ("gray", Rgb::new(0x80, 0x80, 0x80)),
    ("green", Rgb::new(0x00, 0x80, 0x00)),
    ("green_yellow", Rgb::new(0xad, 0xff, 0x2f)),
    ("grey", Rgb::new(0x80, 0x80, 0x80)),
    ("honeydew", Rgb::new(0xf0, 0xff, 0xf0)),
    ("hot_pink", Rgb::new(0xff, 0x69, 0xb4)),
    ("indian_red", Rgb::new(0xcd, 0x5c, 0x5c)),
    ("indigo", Rgb::new(0x4b, 0x00, 0x82)),
    ("ivory", Rgb::new(0xff, 0xff, 0xf0)),
    ("khaki", Rgb::new(0xf0, 0xe6, 0x8c)),
    ("lavender", Rgb::new(0xe6, 0xe6, 0xfa)),
    ("lavender_blush", Rgb::new(0xff, 0xf0, 0xf5)),
    ("lawn_green", Rgb::new(0x7c, 0xfc, 0x00)),
    ("lemon_chiffon", Rgb::new(0xff, 0xfa, 0xcd)),
    ("light_blue", Rgb::new(0xad, 0xd8, 0xe6)),
    ("light_coral", Rgb::new(0xf0, 0x80, 0x80)),
    ("light_cyan", Rgb::new(0xe0, 0xff, 0xff)),
    ("light_goldenrod_yellow", Rgb::new(0xfa, 0xfa, 0xd2)),
    ("light_gray", Rgb::new(0xd3, 0xd3, 0xd3)),
    ("light_green", Rgb::new(0x90, 0xee, 0x90)),
    ("light_grey", Rgb::new(0xd3, 0xd3, 0xd3)),
    ("light_pink", Rgb::new(0xff, 0xb6, 0xc1)),
    ("light_salmon", Rgb::new(0xff, 0xa0, 0x7a)),
    ("light_sea_green", Rgb::new(0x20, 0xb2, 0xaa)),
    ("light_sky_blue", Rgb::new(0x87, 0xce, 0xfa)),
    ("light_slate_gray", Rgb::new(0x77, 0x88, 0x99)),
    ("light_slate_grey", Rgb::new(0x77, 0x88, 0x99)),
    ("light_steel_blue", Rgb::new(0xb0, 0xc4, 0xde)),
    ("light_yellow", Rgb::new(0xff, 0xff, 0xe0)),
    ("lime", Rgb::new(0x00, 0xff, 0x00)),
    ("lime_green", Rgb::new(0x32, 0xcd, 0x32)),
    ("linen", Rgb::new(0xfa, 0xf0, 0xe6)),
    ("magenta", Rgb::new(0xff, 0x00, 0xff)),
    ("maroon", Rgb::new(0x80, 0x00, 0x00)),
    ("medium_aquamarine", Rgb::new(0x66, 0xcd, 0xaa)),
    ("medium_blue", Rgb::new(0x00, 0x00, 0xcd)),
    ("medium_orchid", Rgb::new(0xba, 0x55, 0xd3)),
    ("medium_purple", Rgb::new(0x93, 0x70, 0xdb)),
    ("medium_sea_green", Rgb::new(0x3c, 0xb3, 0x71)),
    ("medium_slate_blue", Rgb::new(0x7b, 0x68, 0xee)),
    ("medium_spring_green", Rgb::new(0x00, 0xfa, 0x9a)),
    ("medium_turquoise", Rgb::new(0x48, 0xd1, 0xcc)),
    ("medium_violet_red", Rgb::new(0xc7, 0x15, 0x85)),
    ("midnight_blue", Rgb::new(0x19, 0x19, 0x70)),
    ("mint_cream", Rgb::new(0xf5, 0xff, 0xfa)),
    ("misty_rose", Rgb::new(0xff, 0xe4, 0xe1)),
    ("moccasin", Rgb::new(0xff, 0xe4, 0xb5)),
    ("navajo_white", Rgb::new(0xff, 0xde, 0xad)),
    ("navy", Rgb::new(0x00, 0x00, 0x80)),
    ("old_lace", Rgb::new(0xfd, 0xf5, 0xe6)),
    ("olive", Rgb::new(0x80, 0x80, 0x00)),
    ("olive_drab", Rgb::new(0x6b, 0x8e, 0x23)),
    ("orange", Rgb::new(0xff, 0xa5, 0x00)),
    ("orange_red", Rgb::new(0xff, 0x45, 0x00)),
    ("orchid", Rgb::new(0xda, 0x70, 0xd6)),
    ("pale_goldenrod", Rgb::new(0xee, 0xe8, 0xaa)),
    ("pale_green", Rgb::new(0x98, 0xfb, 0x98)),
    ("pale_turquoise", Rgb::new(0xaf, 0xee, 0xee)),
    ("pale_violet_red", Rgb::new(0xdb, 0x70, 0x93)),
    ("papaya_whip", Rgb::new(0xff, 0xef, 0xd5)),
    ("peach_puff", Rgb::new(0xff, 0xda, 0xb9)),
    ("peru", Rgb::new(0xcd, 0x85, 0x3f)),
    ("pink", Rgb::new(0xff, 0xc0, 0xcb)),
    ("plum", Rgb::new(0xdd, 0xa0, 0xdd)),
    ("powder_blue", Rgb::new(0xb0, 0xe0, 0xe6)),
    ("purple", Rgb::new(0x80, 0x00, 0x80)),
    ("rebecca_purple", Rgb::new(0x66, 0x33, 0x99)),
    ("red", Rgb::new(0xff, 0x00, 0x00)),
    ("rosy_brown", Rgb::new(0xbc, 0x8f, 0x8f)),
    ("royal_blue", Rgb::new(0x41, 0x69, 0xe1)),
    ("saddle_brown", Rgb::new(0x8b, 0x45, 0x13)),
    ("salmon", Rgb::new(0xfa, 0x80, 0x72)),
    ("sandy_brown", Rgb::new(0xf4, 0xa4, 0x60)),
    ("sea_green", Rgb::new(0x2e, 0x8b, 0x57)),
    ("sea_shell", Rgb::new(0xff, 0xf5, 0xee)),
    ("sienna", Rgb::new(0xa0, 0x52, 0x2d)),
    ("silver", Rgb::new(0xc0, 0xc0, 0xc0)),
    ("sky_blue", Rgb::new(0x87, 0xce, 0xeb)),
    ("slate_blue", Rgb::new(0x6a, 0x5a, 0xcd)),
    ("slate_gray", Rgb::new(0x70, 0x80, 0x90)),
    ("slate_grey", Rgb::new(0x70, 0x80, 0x90)),
    ("snow", Rgb::new(0xff, 0xfa, 0xfa)),
    ("spring_green", Rgb::new(0x00, 0xff, 0x7f)),
    ("steel_blue", Rgb::new(0x46, 0x82, 0xb4)),
    ("tan", Rgb::new(0xd2, 0xb4, 0x8c)),
    ("teal", Rgb::new(0x00, 0x80, 0x80)),
    ("thistle", Rgb::new(0xd8, 0xbf, 0xd8)),
    ("tomato", Rgb::new(0xff, 0x63, 0x47)),
    ("turquoise", Rgb::new(0x40, 0xe0, 0xd0)),
    ("violet", Rgb::new(0xee, 0x82, 0xee)),
    ("wheat", Rgb::new(0xf5, 0xde, 0xb3)),
    ("white", Rgb::new(0xff, 0xff, 0xff)),
    ("white_smoke", Rgb::new(0xf5, 0xf5, 0xf5)),
    ("yellow", Rgb::new(0xff, 0xff, 0x00)),
    ("yellow_green", Rgb::new(0x9a, 0xcd, 0x32)),
];

/// The host environment's own palette constants.
pub(crate) const HOST_COLORS: &[(&str, Rgb)] = &[
    ("white", Rgb::new(0xff, 0xff, 0xff)),
    ("silver", Rgb::new(0xc0, 0xc0, 0xc0)),
    ("gray", Rgb::new(0x80, 0x80, 0x80)),
    ("black", Rgb::new(0x00, 0x00, 0x00)),
    ("red", Rgb::new(0xff, 0x00, 0x00)),
    ("maroon", Rgb::new(0x80, 0x00, 0x00)),
    ("yellow", Rgb::new(0xff, 0xff, 0x00)),
    ("olive", Rgb::new(0x80, 0x80, 0x00)),
    ("lime", Rgb::new(0x00, 0xff, 0x00)),
    ("green", Rgb::new(0x00, 0x80, 0x00)),
    ("aqua", Rgb::new(0x00, 0xff, 0xff)),
    ("teal", Rgb::new(0x00, 0x80, 0x80)),
    ("blue", Rgb::new(0x00, 0x00, 0xff)),
    ("navy", Rgb::new(0x00, 0x00, 0x80)),
    ("fuchsia", Rgb::new(0xff, 0x00, 0xff)),
    ("purple", Rgb::new(0x80, 0x00, 0x80)),
    ("orange", Rgb::new(0xff, 0xa5, 0x00)),
];
