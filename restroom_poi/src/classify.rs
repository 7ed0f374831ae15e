use anyhow::Result;
use regex::Regex;

/// One audience of restrooms. Passes run in table order; a room claimed by an earlier pass is
/// invisible to later ones.
#[derive(Clone, Copy, Debug)]
pub struct AudienceGroup {
    /// Appended to the "WC" type label. Empty for the catch-all group.
    pub name: &'static str,
    /// Room-name keywords claiming a room for this audience, matched as whole words. A group
    /// with no keywords claims every room still unclaimed.
    pub keywords: &'static [&'static str],
    /// Claim matched rooms but emit no POIs for them.
    pub omit: bool,
}

/// The standard five passes, most specific audience first. The keyword lists follow the room
/// dataset's naming conventions (Czech).
pub fn default_groups() -> Vec<AudienceGroup> {
    vec![
        AudienceGroup {
            name: "zaměstnanci",
            keywords: &[
                "bufet",
                "byt",
                "děkana",
                "dodavatele",
                "dodavatelů",
                "HWCA",
                "pedagog",
                "personál",
                "personálu",
                "stravování",
                "učitelů",
                "uklízečky",
                "zam",
                "zam.",
                "zaměst.",
                "zaměstnanci",
                "zaměstnanců",
            ],
            omit: true,
        },
        AudienceGroup {
            name: "invalidé",
            keywords: &[
                "bezbariérová",
                "bezbariérové",
                "imobil.",
                "imobilní",
                "IMOBILNÍ",
                "invalida",
                "Invalida",
                "invalidé",
                "invalidi",
                "invalidové",
                "invalidů",
                "telesně postižených",
                "TP",
                "vozíčkáři",
            ],
            omit: false,
        },
        AudienceGroup {
            name: "ženy",
            keywords: &["dámské", "dámy", "HSPŽ", "studentky", "ž", "žen", "ženy"],
            omit: false,
        },
        AudienceGroup {
            name: "muži",
            keywords: &["HSPM", "m", "muži", "mužů", "pánské", "pisoár", "pisoáry"],
            omit: false,
        },
        AudienceGroup {
            name: "",
            keywords: &[],
            omit: false,
        },
    ]
}

/// Room names that are really just a room number ("204", "S101"). They belong to no audience and
/// never feed clustering; the first pass to see one claims it.
const ROOM_NUMBER_NAME: &str = "^[S]?[0-9]{3}";

/// The compiled matchers for one group's pass.
pub struct RoomMatcher {
    room_number: Regex,
    keywords: Vec<Regex>,
}

impl RoomMatcher {
    pub fn new(group: &AudienceGroup) -> Result<RoomMatcher> {
        let mut keywords = Vec::new();
        for kw in group.keywords {
            // Whole-word match: bounded by non-letters or the ends of the name.
            keywords.push(Regex::new(&format!(
                "(^|[^a-z]){}([^a-z]|$)",
                regex::escape(kw)
            ))?);
        }
        Ok(RoomMatcher {
            room_number: Regex::new(ROOM_NUMBER_NAME)?,
            keywords,
        })
    }

    /// Does any of the group's keywords match this room name as a whole word?
    pub fn matches_keyword(&self, name: &str) -> bool {
        self.keywords.iter().any(|re| re.is_match(name))
    }

    /// Is the name just a room number?
    pub fn is_room_number(&self, name: &str) -> bool {
        self.room_number.is_match(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher(keywords: &'static [&'static str]) -> RoomMatcher {
        RoomMatcher::new(&AudienceGroup {
            name: "test",
            keywords,
            omit: false,
        })
        .unwrap()
    }

    #[test]
    fn whole_word_boundaries() {
        let m = matcher(&["muži", "m"]);
        assert!(m.matches_keyword("WC muži"));
        assert!(m.matches_keyword("muži"));
        assert!(m.matches_keyword("WC m 2.NP"));
        // Letter on either side breaks the word.
        assert!(!m.matches_keyword("mužika"));
        assert!(!m.matches_keyword("WC zum"));
    }

    #[test]
    fn keywords_match_literally() {
        let m = matcher(&["zam."]);
        assert!(m.matches_keyword("WC zam."));
        // The dot is literal, not a wildcard.
        assert!(!m.matches_keyword("WC zamX"));
    }

    #[test]
    fn room_number_names() {
        let m = matcher(&[]);
        assert!(m.is_room_number("204"));
        assert!(m.is_room_number("S101 WC"));
        assert!(!m.is_room_number("WC 204"));
        assert!(!m.is_room_number("21"));
    }
}
