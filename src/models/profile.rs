//! Static profile content rendered around the repository showcase.
//!
//! Everything here is compiled in and never changes at runtime.

use serde::Serialize;

/// Number of experience entries shown before the "show more" toggle.
pub const EXPERIENCE_PREVIEW_COUNT: usize = 3;

/// GitHub handle whose repositories are showcased.
pub const GITHUB_USERNAME: &str = "wirednkod";

/// One work history entry.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Experience {
    pub role: &'static str,
    pub company: &'static str,
    pub dates: &'static str,
    pub highlights: &'static [&'static str],
}

/// One education entry.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Education {
    pub program: &'static str,
    pub school: &'static str,
    pub date: &'static str,
}

pub const SKILLS: &[&str] = &[
    "typescript",
    "react",
    "node.js",
    "rust",
    "postgresql",
    "systems design",
    "agentic coding",
    "graphql",
    "substrate",
    "developer tooling",
    "java",
];

pub const EXPERIENCE: &[Experience] = &[
    Experience {
        role: "lead software engineer",
        company: "phaedra botanicals · remote",
        dates: "apr 2019 - present",
        highlights: &[
            "defining the technical strategy.",
            "designing the architecture.",
            "building the automation roadmap powering product delivery and operations.",
        ],
    },
    Experience {
        role: "lead software engineer",
        company: "polkadot blockchain academy · full-time · remote",
        dates: "feb 2024 - jan 2026",
        highlights: &[
            "led curriculum and technical infrastructure, shaping the academy into the flagship polkadot program.",
            "recruited and coordinated faculty from parity, web3foundation, and the wider web3 community.",
            "owned the technical stack (github classroom, automations, web platforms) and supported pba-x.",
        ],
    },
    Experience {
        role: "snr software engineer",
        company: "parity technologies · full-time · remote",
        dates: "feb 2021 - jan 2024",
        highlights: &[
            "contributed to substrate connect with smoldot-based light client integration.",
            "enabled secure, resource-efficient dapp connectivity without centralized rpc endpoints.",
            "advanced zombienet testing framework and migration to rust for performance and stability.",
        ],
    },
    Experience {
        role: "lead software engineer",
        company: "intralot · full-time · athens, greece",
        dates: "apr 2020 - jan 2021",
        highlights: &[
            "led the trading tools backoffice team for sportsbook platform.",
            "stack: react, node.js, apollo, graphql.",
        ],
    },
    Experience {
        role: "snr software engineer",
        company: "intralot · full-time · athens, greece",
        dates: "nov 2018 - apr 2020",
        highlights: &[
            "application analysis and specification gathering.",
            "implemented algorithms and core logic for a next-gen betting sportsbook system.",
            "stack: java, graphql, react.",
        ],
    },
    Experience {
        role: "snr software engineer",
        company: "intrasoft international · full-time · greece",
        dates: "feb 2017 - oct 2018",
        highlights: &["built sportsbook backoffice with java, node.js, postgres, react, graphql."],
    },
    Experience {
        role: "snr application engineer",
        company: "first data corporation · full-time · athens, greece",
        dates: "nov 2016 - jan 2017",
        highlights: &["owned anti-fraud application design, maintenance, and backend processes."],
    },
    Experience {
        role: "snr software engineer - full stack",
        company: "bdswiss · full-time · athens, greece",
        dates: "aug 2015 - aug 2016",
        highlights: &[
            "built spAs, integrations, and production support for trading platforms.",
            "stack: javascript, node.js, react, postgresql, mysql, html, css, sass.",
        ],
    },
    Experience {
        role: "software engineer",
        company: "eastern mediterranean maritime archaeology foundation · athens, greece",
        dates: "oct 2010 - apr 2019",
        highlights: &[
            "gathered specs, built and supported web platforms, and managed migrations.",
            "stack: php, css, javascript, mysql.",
        ],
    },
    Experience {
        role: "software engineer",
        company: "sophicus · athens, greece",
        dates: "sep 2013 - sep 2015",
        highlights: &["built research platform with django, jquery, and mysql/sqlite."],
    },
    Experience {
        role: "fellow",
        company: "metavallon",
        dates: "nov 2012 - feb 2018",
        highlights: &["early-stage startup support and acceleration."],
    },
    Experience {
        role: "software engineering snr analyst",
        company: "accenture · full-time · athens, greece",
        dates: "apr 2011 - jul 2015",
        highlights: &["service delivery lead for telecom vas modernization and soa integrations."],
    },
    Experience {
        role: "software engineering analyst",
        company: "accenture · full-time · athens, greece",
        dates: "oct 2009 - mar 2011",
        highlights: &["application operations and enterprise integration for telecom platforms."],
    },
    Experience {
        role: "software developer",
        company: "papaki.gr - usableweb s.a · heraklion, greece",
        dates: "jun 2007 - feb 2008",
        highlights: &["web programmer for client websites and tooling."],
    },
    Experience {
        role: "developer",
        company: "computer planet · rethimno, greece",
        dates: "apr 2006 - jun 2007",
        highlights: &["support programming with .net, sql, and access."],
    },
];

pub const EDUCATION: &[Education] = &[
    Education {
        program: "protocol track (5-week course)",
        school: "polkadot blockchain academy, buenos aires, argentina",
        date: "graduated feb 2023",
    },
    Education {
        program: "m.a. graphic arts & multimedia",
        school: "open university, patra - greece",
        date: "graduated aug 2012",
    },
    Education {
        program: "b.sc. applied it & multimedia",
        school: "technological educational institute, crete - greece",
        date: "graduated jan 2006",
    },
    Education {
        program: "computer graphics & multimedia (socrates scheme)",
        school: "university of technology, brno - czechia",
        date: "6-month program",
    },
];

pub const LANGUAGES: &[&str] = &["greek (native)", "english (professional)", "german (elementary)"];

/// Experience split into the always-visible preview and the collapsible rest.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceSections {
    pub preview: &'static [Experience],
    pub extra: &'static [Experience],
    pub has_more: bool,
}

impl ExperienceSections {
    pub fn split(entries: &'static [Experience], preview_count: usize) -> Self {
        let (preview, extra) = entries.split_at(preview_count.min(entries.len()));
        Self {
            preview,
            extra,
            has_more: !extra.is_empty(),
        }
    }
}

/// Full profile payload served to the rendering layer.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub github_username: &'static str,
    pub skills: &'static [&'static str],
    pub experience: ExperienceSections,
    pub education: &'static [Education],
    pub languages: &'static [&'static str],
}

impl Profile {
    pub fn load() -> Self {
        Self {
            github_username: GITHUB_USERNAME,
            skills: SKILLS,
            experience: ExperienceSections::split(EXPERIENCE, EXPERIENCE_PREVIEW_COUNT),
            education: EDUCATION,
            languages: LANGUAGES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_experience_split() {
        let sections = ExperienceSections::split(EXPERIENCE, EXPERIENCE_PREVIEW_COUNT);
        assert_eq!(sections.preview.len(), 3);
        assert_eq!(sections.extra.len(), EXPERIENCE.len() - 3);
        assert!(sections.has_more);
        assert_eq!(sections.preview[0].company, "phaedra botanicals · remote");
    }

    #[test]
    fn test_split_larger_than_list() {
        let sections = ExperienceSections::split(&EXPERIENCE[..2], 5);
        assert_eq!(sections.preview.len(), 2);
        assert!(sections.extra.is_empty());
        assert!(!sections.has_more);
    }

    #[test]
    fn test_profile_serialization() {
        let json = serde_json::to_value(Profile::load()).unwrap();
        assert_eq!(json["githubUsername"], "wirednkod");
        assert_eq!(json["skills"].as_array().unwrap().len(), SKILLS.len());
        assert_eq!(json["experience"]["hasMore"], true);
        assert_eq!(json["education"][0]["date"], "graduated feb 2023");
        assert_eq!(json["languages"][0], "greek (native)");
    }
}
