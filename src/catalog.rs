//! Static reference data: channel lineup, edge servers, and content hosts.
//!
//! Server and channel names/numbers are sourced from SmoothStreamsTV and
//! current as of October 3, 2018.

/// Edge servers, as (display name, server code) pairs.
pub static SERVERS: &[(&str, &str)] = &[
    ("Asia Random", "dap"),
    ("Europe Random", "deu"),
    ("Europe Germany Random", "deu-de"),
    ("Europe Netherlands Random", "deu-nl"),
    ("Europe Netherlands 1 (i3d)", "deu-nl1"),
    ("Europe Netherlands 2 (i3d)", "deu-nl2"),
    ("Europe Netherlands 3 (Amsterdam)", "deu-nl3"),
    ("Europe Netherlands 4 (Breda)", "deu-nl4"),
    ("Europe Netherlands 5 (Enschede)", "deu-nl5"),
    ("Europe United Kingdom Random", "deu-uk"),
    ("Europe United Kingdom 1 (io)", "deu-uk1"),
    ("Europe United Kingdom 2 (100TB)", "deu-uk2"),
    ("North America Random", "dna"),
    ("North America East Random", "dnae"),
    ("North America East 1 (New York)", "dnae1"),
    ("North America East 2 (Virginia)", "dnae2"),
    ("North America East 3 (Quebec)", "dnae3"),
    ("North America East 4 (Georgia)", "dnae4"),
    ("North America East 6 (New York)", "dnae6"),
    ("North America West Random", "dnaw"),
    ("North America West 1 (Arizona)", "dnaw1"),
    ("North America West 2 (California)", "dnaw2"),
    ("North America West 3 (Illinois)", "dnaw3"),
    ("North America West 4 (Illinois II)", "dnaw4"),
];

/// Content hosts, as (display name, host code) pairs.
pub static HOSTS: &[(&str, &str)] = &[
    ("Live247", "view247"),
    ("MMA-TV/MyShout", "viewmmasr"),
    ("MyStreams", "viewms"),
    ("StarStreams", "viewss"),
    ("StreamTVNow", "viewstvn"),
];

/// Look up the display name for a server code.
pub fn server_name(code: &str) -> Option<&'static str> {
    SERVERS
        .iter()
        .find(|(_, c)| *c == code)
        .map(|(name, _)| *name)
}

/// Look up the display name for a host code.
pub fn host_name(code: &str) -> Option<&'static str> {
    HOSTS
        .iter()
        .find(|(_, c)| *c == code)
        .map(|(name, _)| *name)
}

/// Channel lineup, as (numeric id, display name) pairs.
///
/// Ids are rendered zero-padded to two digits wherever they appear in
/// playlist output. Consumers must not rely on the storage order of this
/// slice; playlist generation sorts by numeric id.
pub static CHANNELS: &[(u32, &str)] = &[
    (1, "ESPNNews"),
    (2, "ESPN"),
    (3, "ESPN 2"),
    (4, "ESPN U"),
    (5, "Fox Sports 1"),
    (6, "Fox Sports 2"),
    (7, "NFL Network"),
    (8, "NBA TV"),
    (9, "MLB Network"),
    (10, "NHL Network"),
    (11, "NBC Sports Network"),
    (12, "Golf Channel"),
    (13, "Tennis Channel"),
    (14, "CBS Sports Network"),
    (15, "Fight Network"),
    (16, "WWE Network"),
    (17, "Sportsnet World"),
    (18, "Sportsnet 360"),
    (19, "Sportsnet Ontario"),
    (20, "Sportsnet One"),
    (21, "TSN 1"),
    (22, "Univision Deportes"),
    (23, "ESPN Deportes"),
    (24, "Comedy Central"),
    (25, "Spike"),
    (26, "USA Network"),
    (27, "A&E"),
    (28, "TBS"),
    (29, "TNT"),
    (30, "SyFy"),
    (31, "Cartoon Network East"),
    (32, "HGTV"),
    (33, "CNN"),
    (34, "NBC East"),
    (35, "CBS East"),
    (36, "ABC East"),
    (37, "Fox East"),
    (38, "Viceland"),
    (39, "CNBC"),
    (40, "Fox News 360"),
    (41, "History Channel"),
    (42, "Discovery Channel"),
    (43, "National Geographic"),
    (44, "FX"),
    (45, "FXX"),
    (46, "BeIN USA"),
    (47, "AMC"),
    (48, "HBO East"),
    (49, "HBO Comedy"),
    (50, "HBO Signature"),
    (51, "HBO Zone"),
    (52, "Showtime East"),
    (53, "ActionMax HD East"),
    (54, "Cinemax Moremax"),
    (55, "Starz Cinema"),
    (56, "Starz East"),
    (57, "Starz Cinema"),
    (58, "Investigation America"),
    (59, "Cinemax East"),
    (60, "Cinemax 5 Star"),
    (61, "BBC America"),
    (62, "Fox Business"),
    (63, "Food Network"),
    (64, "E!"),
    (65, "MSNBC"),
    (66, "SCI"),
    (67, "Food Network"),
    (68, "Animal Planet"),
    (69, "Velocity"),
    (70, "US West"),
    (71, "US West"),
    (72, "US West"),
    (73, "Spectrum Sportsnet"),
    (74, "MMA Slot 1"),
    (75, "MMA Slot 2"),
    (76, "ePix"),
    (77, "ePix2"),
    (78, "ePix3"),
    (79, "TLC"),
    (80, "Lifetime"),
    (81, "Bravo"),
    (82, "DIY Network"),
    (83, "Oxygen"),
    (84, "CBC"),
    (85, "National Geographic Wild"),
    (86, "Univision"),
    (87, "Telemundo"),
    (88, "European Slot"),
    (89, "European Slot"),
    (90, "European Slot"),
    (91, "European Slot"),
    (92, "European Slot"),
    (93, "European Slot"),
    (94, "European Slot"),
    (95, "European Slot"),
    (96, "European Slot"),
    (97, "European Slot"),
    (98, "European Slot"),
    (99, "European Slot"),
    (100, "Willow"),
    (101, "Nick Jr"),
    (102, "Disney Channel"),
    (103, "Channel 103"),
    (104, "Channel 104"),
    (105, "EuroSport International 1"),
    (106, "EuroSport International 2"),
    (107, "Eir Sport 2"),
    (108, "BT Sport 1"),
    (109, "BT Sport 2"),
    (110, "BT Sport 3"),
    (111, "BT Sport ESPN"),
    (112, "Sky Sports News HQ"),
    (113, "Sky Sports Main"),
    (114, "Sky Sports Cricket"),
    (115, "Sky Sports Action"),
    (116, "Sky Sports Golf"),
    (117, "Sky Sports PL"),
    (118, "Sky Sports F1"),
    (119, "Sky Sports Mix"),
    (120, "Sky Sports Football"),
    (121, "Sky Sports Arena"),
    (122, "Racing UK"),
    (123, "Channel 123"),
    (124, "Channel 124"),
    (125, "Channel 125"),
    (126, "Channel 126"),
    (127, "Channel 127"),
    (128, "Channel 128"),
    (129, "Channel 129"),
    (130, "Channel 130"),
    (131, "Channel 131"),
    (132, "Channel 132"),
    (133, "Channel 133"),
    (134, "Channel 134"),
    (135, "Channel 135"),
    (136, "Channel 136"),
    (137, "Channel 137"),
    (138, "Channel 138"),
    (139, "Channel 139"),
    (140, "Channel 140"),
    (141, "Channel 141"),
    (142, "Channel 142"),
    (143, "Channel 143"),
    (144, "Channel 144"),
    (145, "Channel 145"),
    (146, "Channel 146"),
    (147, "Channel 147"),
    (148, "Channel 148"),
    (149, "Channel 149"),
    (150, "Channel 150"),
];
