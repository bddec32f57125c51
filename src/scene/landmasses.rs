//! Simplified continent outlines for the earth texture, as (lat, lng) degrees.

/// RGB color.
pub type Rgb = [u8; 3];

pub struct Landmass {
    pub name: &'static str,
    pub fill: Rgb,
    pub outline: Option<Rgb>,
    pub points: &'static [(f32, f32)],
}

const GREEN_DARK: Rgb = [0x2E, 0x7D, 0x32];
const GREEN_DEEP: Rgb = [0x1B, 0x5E, 0x20];
const GREEN: Rgb = [0x38, 0x8E, 0x3C];
const GREEN_LIGHT: Rgb = [0x43, 0xA0, 0x47];
const GREEN_BRIGHT: Rgb = [0x4C, 0xAF, 0x50];
const ICE_NORTH: Rgb = [0xC8, 0xE6, 0xC9];
const ICE_NORTH_EDGE: Rgb = [0xA5, 0xD6, 0xA7];
const ICE_SOUTH: Rgb = [0xE8, 0xF5, 0xE9];

/// Drawn in order; later entries paint over earlier ones.
pub const LANDMASSES: [Landmass; 13] = [
    Landmass {
        name: "North America",
        fill: GREEN_DARK,
        outline: Some(GREEN_DEEP),
        points: &[
            (72.0, -168.0), (70.0, -140.0), (68.0, -130.0), (60.0, -140.0), (58.0, -152.0), (55.0, -165.0),
            (55.0, -130.0), (50.0, -128.0), (48.0, -123.0), (45.0, -124.0), (40.0, -124.0), (35.0, -120.0),
            (32.0, -117.0), (28.0, -115.0), (25.0, -110.0), (22.0, -105.0), (18.0, -97.0), (16.0, -90.0),
            (15.0, -87.0), (18.0, -88.0), (20.0, -87.0), (22.0, -85.0), (20.0, -90.0), (25.0, -80.0),
            (30.0, -82.0), (32.0, -80.0), (35.0, -75.0), (38.0, -75.0), (40.0, -74.0), (42.0, -70.0),
            (44.0, -67.0), (47.0, -65.0), (46.0, -60.0), (48.0, -56.0), (50.0, -56.0), (52.0, -56.0),
            (55.0, -60.0), (58.0, -62.0), (62.0, -64.0), (65.0, -60.0), (68.0, -55.0), (72.0, -60.0),
            (75.0, -70.0), (78.0, -75.0), (80.0, -85.0), (80.0, -100.0), (76.0, -120.0), (73.0, -140.0),
            (72.0, -168.0),
        ],
    },
    Landmass {
        name: "Greenland",
        fill: GREEN,
        outline: Some(GREEN_DARK),
        points: &[
            (78.0, -72.0), (80.0, -60.0), (82.0, -45.0), (83.0, -35.0), (82.0, -20.0), (78.0, -18.0),
            (76.0, -20.0), (72.0, -22.0), (70.0, -25.0), (68.0, -30.0), (65.0, -38.0), (62.0, -42.0),
            (62.0, -48.0), (64.0, -52.0), (68.0, -55.0), (72.0, -56.0), (76.0, -60.0), (78.0, -72.0),
        ],
    },
    Landmass {
        name: "Central America",
        fill: GREEN,
        outline: Some(GREEN_DARK),
        points: &[
            (18.0, -97.0), (16.0, -96.0), (15.0, -92.0), (14.0, -90.0), (12.0, -87.0), (10.0, -84.0),
            (9.0, -80.0), (8.0, -77.0), (10.0, -77.0), (10.0, -83.0), (12.0, -85.0), (14.0, -88.0),
            (16.0, -90.0), (18.0, -97.0),
        ],
    },
    Landmass {
        name: "South America",
        fill: GREEN_DARK,
        outline: Some(GREEN_DEEP),
        points: &[
            (10.0, -75.0), (8.0, -72.0), (6.0, -68.0), (5.0, -60.0), (2.0, -52.0), (0.0, -50.0),
            (-2.0, -45.0), (-5.0, -38.0), (-8.0, -35.0), (-12.0, -38.0), (-15.0, -40.0), (-18.0, -40.0),
            (-22.0, -42.0), (-23.0, -45.0), (-28.0, -48.0), (-32.0, -52.0), (-35.0, -55.0), (-38.0, -58.0),
            (-42.0, -62.0), (-46.0, -66.0), (-50.0, -70.0), (-52.0, -72.0), (-54.0, -70.0), (-55.0, -66.0),
            (-53.0, -60.0), (-48.0, -58.0), (-42.0, -60.0), (-38.0, -56.0), (-35.0, -54.0), (-30.0, -50.0),
            (-25.0, -48.0), (-22.0, -42.0), (-18.0, -40.0), (-12.0, -77.0), (-8.0, -79.0), (-5.0, -80.0),
            (0.0, -80.0), (5.0, -77.0), (10.0, -75.0),
        ],
    },
    Landmass {
        name: "Europe",
        fill: GREEN,
        outline: Some(GREEN_DARK),
        points: &[
            (70.0, 28.0), (68.0, 15.0), (65.0, 12.0), (60.0, 5.0), (58.0, 8.0), (56.0, 8.0),
            (54.0, 6.0), (52.0, 4.0), (50.0, 2.0), (48.0, -4.0), (46.0, -1.0), (44.0, -8.0),
            (42.0, -9.0), (38.0, -9.0), (36.0, -6.0), (36.0, 0.0), (38.0, 0.0), (40.0, 0.0),
            (42.0, 3.0), (44.0, 8.0), (45.0, 12.0), (44.0, 15.0), (42.0, 15.0), (40.0, 20.0),
            (38.0, 22.0), (36.0, 22.0), (38.0, 25.0), (40.0, 25.0), (42.0, 28.0), (44.0, 28.0),
            (46.0, 15.0), (48.0, 15.0), (50.0, 18.0), (52.0, 14.0), (54.0, 14.0), (55.0, 12.0),
            (56.0, 16.0), (58.0, 18.0), (60.0, 20.0), (62.0, 18.0), (63.0, 20.0), (65.0, 25.0),
            (68.0, 26.0), (70.0, 28.0),
        ],
    },
    Landmass {
        name: "Scandinavia",
        fill: GREEN_LIGHT,
        outline: Some(GREEN_DARK),
        points: &[
            (58.0, 5.0), (60.0, 5.0), (62.0, 5.0), (65.0, 12.0), (68.0, 15.0), (70.0, 20.0),
            (72.0, 25.0), (72.0, 28.0), (70.0, 30.0), (65.0, 25.0), (62.0, 18.0), (60.0, 18.0),
            (58.0, 12.0), (58.0, 5.0),
        ],
    },
    Landmass {
        name: "Africa",
        fill: GREEN_DARK,
        outline: Some(GREEN_DEEP),
        points: &[
            (37.0, -5.0), (35.0, -2.0), (35.0, 10.0), (32.0, 10.0), (30.0, 32.0), (25.0, 35.0),
            (20.0, 38.0), (15.0, 42.0), (12.0, 44.0), (10.0, 42.0), (5.0, 42.0), (2.0, 42.0),
            (0.0, 42.0), (-5.0, 40.0), (-10.0, 40.0), (-15.0, 38.0), (-20.0, 35.0), (-25.0, 33.0),
            (-28.0, 32.0), (-32.0, 28.0), (-35.0, 20.0), (-34.0, 18.0), (-30.0, 17.0), (-25.0, 15.0),
            (-20.0, 12.0), (-15.0, 12.0), (-10.0, 14.0), (-5.0, 10.0), (0.0, 10.0), (5.0, 2.0),
            (5.0, -5.0), (8.0, -10.0), (10.0, -15.0), (15.0, -17.0), (18.0, -16.0), (22.0, -16.0),
            (25.0, -15.0), (30.0, -10.0), (33.0, -8.0), (36.0, -5.0), (37.0, -5.0),
        ],
    },
    Landmass {
        name: "Asia",
        fill: GREEN,
        outline: Some(GREEN_DARK),
        points: &[
            (70.0, 28.0), (68.0, 40.0), (65.0, 50.0), (62.0, 60.0), (60.0, 65.0), (55.0, 68.0),
            (50.0, 70.0), (48.0, 68.0), (45.0, 65.0), (42.0, 60.0), (40.0, 55.0), (38.0, 48.0),
            (35.0, 45.0), (30.0, 48.0), (28.0, 55.0), (25.0, 58.0), (22.0, 60.0), (18.0, 62.0),
            (15.0, 68.0), (12.0, 72.0), (10.0, 76.0), (8.0, 78.0), (5.0, 80.0), (2.0, 95.0),
            (1.0, 104.0), (-2.0, 106.0), (-5.0, 106.0), (-8.0, 110.0), (-7.0, 115.0), (-5.0, 118.0),
            (0.0, 118.0), (5.0, 120.0), (10.0, 120.0), (15.0, 121.0), (18.0, 115.0), (22.0, 108.0),
            (25.0, 105.0), (28.0, 100.0), (30.0, 96.0), (25.0, 92.0), (22.0, 88.0), (22.0, 85.0),
            (25.0, 82.0), (28.0, 78.0), (30.0, 75.0), (35.0, 70.0), (38.0, 65.0), (40.0, 60.0),
            (42.0, 55.0), (45.0, 55.0), (48.0, 55.0), (50.0, 60.0), (55.0, 72.0), (58.0, 80.0),
            (60.0, 90.0), (62.0, 100.0), (65.0, 110.0), (68.0, 120.0), (70.0, 130.0), (70.0, 140.0),
            (68.0, 150.0), (65.0, 160.0), (63.0, 170.0), (66.0, 177.0), (70.0, 178.0), (72.0, 170.0),
            (70.0, 140.0), (72.0, 120.0), (73.0, 100.0), (75.0, 80.0), (73.0, 60.0), (72.0, 40.0),
            (70.0, 28.0),
        ],
    },
    Landmass {
        name: "India",
        fill: GREEN_BRIGHT,
        outline: Some(GREEN_DARK),
        points: &[
            (30.0, 75.0), (28.0, 72.0), (25.0, 70.0), (22.0, 72.0), (20.0, 73.0), (18.0, 73.0),
            (15.0, 75.0), (12.0, 76.0), (10.0, 77.0), (8.0, 77.0), (8.0, 78.0), (10.0, 80.0),
            (15.0, 80.0), (18.0, 83.0), (20.0, 85.0), (22.0, 88.0), (25.0, 90.0), (28.0, 85.0),
            (30.0, 80.0), (32.0, 78.0), (35.0, 75.0), (30.0, 75.0),
        ],
    },
    Landmass {
        name: "Japan",
        fill: GREEN_LIGHT,
        outline: Some(GREEN_DARK),
        points: &[
            (45.0, 140.0), (42.0, 143.0), (38.0, 141.0), (35.0, 137.0), (33.0, 132.0), (34.0, 130.0),
            (36.0, 133.0), (38.0, 136.0), (40.0, 139.0), (42.0, 141.0), (45.0, 145.0), (45.0, 140.0),
        ],
    },
    Landmass {
        name: "Australia",
        fill: GREEN,
        outline: Some(GREEN_DARK),
        points: &[
            (-12.0, 132.0), (-14.0, 126.0), (-18.0, 122.0), (-22.0, 114.0), (-25.0, 114.0),
            (-28.0, 115.0), (-32.0, 116.0), (-35.0, 117.0), (-35.0, 120.0), (-35.0, 130.0),
            (-35.0, 137.0), (-38.0, 145.0), (-37.0, 148.0), (-34.0, 151.0), (-30.0, 153.0),
            (-27.0, 153.0), (-24.0, 150.0), (-20.0, 148.0), (-18.0, 146.0), (-16.0, 145.0),
            (-14.0, 142.0), (-12.0, 138.0), (-12.0, 136.0), (-12.0, 132.0),
        ],
    },
    Landmass {
        name: "Arctic ice",
        fill: ICE_NORTH,
        outline: Some(ICE_NORTH_EDGE),
        points: &[
            (85.0, -180.0), (85.0, -90.0), (85.0, 0.0), (85.0, 90.0), (85.0, 180.0),
            (90.0, 180.0), (90.0, 0.0), (90.0, -180.0), (85.0, -180.0),
        ],
    },
    Landmass {
        name: "Antarctica",
        fill: ICE_SOUTH,
        outline: Some(ICE_NORTH),
        points: &[
            (-70.0, -180.0), (-75.0, -120.0), (-80.0, -60.0), (-85.0, 0.0), (-80.0, 60.0),
            (-75.0, 120.0), (-70.0, 180.0), (-70.0, 120.0), (-68.0, 60.0), (-70.0, 0.0),
            (-68.0, -60.0), (-70.0, -120.0), (-70.0, -180.0),
        ],
    },
];
