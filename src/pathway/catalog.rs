//! Static per-country guidance catalog
//!
//! Read-only reference data for the resolver: detailed pathway bundles for
//! the most-requested destinations, a generic template for the rest of the
//! selectable set, cost-of-living hints, the fixed default destination list
//! and the advisory tips block. Built once on first use and never mutated,
//! so it is safe to share if the engine is ever hosted behind a server.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use serde::Serialize;

use super::vocab::Country;

/// Per-country guidance bundle: six categories plus an optional note.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryPathwayConfig {
    pub qualification_routes: Vec<String>,
    pub accommodation: Vec<String>,
    pub work_and_study: Vec<String>,
    pub eu_funding: Vec<String>,
    pub national_funding: Vec<String>,
    pub low_income_support: Vec<String>,
    pub note: Option<String>,
}

/// Destinations substituted when the user picked none or "not sure yet".
pub const DEFAULT_DESTINATIONS: [Country; 3] = [Country::Germany, Country::France, Country::Italy];

/// Static advisory block appended to every set of recommendations.
pub const HELPFUL_TIPS: [&str; 3] = [
    "Research funding options such as scholarships, grants, and student loans. Many institutions offer financial support, especially for students from underrepresented backgrounds.",
    "Check recognition of your current qualifications with the destination country's ENIC-NARIC centre before applying.",
    "Application deadlines differ widely between countries; some close almost a year before the course starts.",
];

fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

static DETAILED: Lazy<BTreeMap<Country, CountryPathwayConfig>> = Lazy::new(|| {
    let mut map = BTreeMap::new();

    map.insert(
        Country::Germany,
        CountryPathwayConfig {
            qualification_routes: lines(&[
                "Studienkolleg foundation year for entrants below Abitur-equivalent level",
                "Bachelor programmes at universities and universities of applied sciences (Fachhochschulen)",
                "Dual study programmes combining a degree with paid in-company training",
                "Tuition-free Master's and doctoral study at public universities",
            ]),
            accommodation: lines(&[
                "Studentenwerk halls of residence; apply early, waiting lists are common",
                "Shared flats (WG), the default for most students in university towns",
                "Private studios, usually the most expensive route",
            ]),
            work_and_study: lines(&[
                "EU students work without a permit; non-EU students up to 140 full days per year",
                "Werkstudent contracts allow up to 20 hours per week during term time",
            ]),
            eu_funding: lines(&[
                "Erasmus+ mobility grants for exchanges and traineeships",
                "European Solidarity Corps placements for shorter funded stays",
            ]),
            national_funding: lines(&[
                "DAAD scholarships at every study level",
                "BAf\u{f6}G support for eligible long-term residents",
                "Deutschlandstipendium merit grant of \u{20ac}300 per month",
            ]),
            low_income_support: lines(&[
                "Studentenwerk hardship funds and subsidised meals",
                "BAf\u{f6}G includes a housing allowance for students living away from home",
            ]),
            note: Some(
                "Most public universities charge no tuition fees; budget for the semester contribution of \u{20ac}150-350 instead."
                    .to_string(),
            ),
        },
    );

    map.insert(
        Country::France,
        CountryPathwayConfig {
            qualification_routes: lines(&[
                "Licence (Bachelor) programmes at public universities",
                "BTS and BUT short-cycle vocational diplomas with strong employer links",
                "Grandes \u{e9}coles via preparatory classes or parallel admission",
                "Master and doctoral study with low public tuition",
            ]),
            accommodation: lines(&[
                "CROUS university residences, allocated on social criteria",
                "Shared flats and studios in university cities",
                "Homestay arrangements, common for first-year international students",
            ]),
            work_and_study: lines(&[
                "Students may work up to 964 hours per year alongside study",
                "Alternance contracts combine salaried work with a recognised qualification",
            ]),
            eu_funding: lines(&[
                "Erasmus+ grants for mobility within Europe",
                "French-hosted European University alliances offer funded exchanges",
            ]),
            national_funding: lines(&[
                "CROUS bourses sur crit\u{e8}res sociaux (means-tested grants)",
                "Eiffel excellence scholarships for international Master's and PhD students",
            ]),
            low_income_support: lines(&[
                "CAF housing benefit (APL), available to students including internationals",
                "\u{20ac}1 meals at CROUS restaurants for grant holders",
            ]),
            note: Some(
                "Public university tuition is a few hundred euros per year; private schools charge far more."
                    .to_string(),
            ),
        },
    );

    map.insert(
        Country::Italy,
        CountryPathwayConfig {
            qualification_routes: lines(&[
                "Laurea triennale (Bachelor) and laurea magistrale (Master) at public universities",
                "ITS Academy two-year vocational programmes with high employment rates",
                "AFAM institutes for art, music and design qualifications",
            ]),
            accommodation: lines(&[
                "Regional DSU student housing, means-tested",
                "Shared apartments, the norm in most university cities",
                "Private rentals; prices vary sharply between north and south",
            ]),
            work_and_study: lines(&[
                "Part-time work permitted alongside study; university collaborations pay hourly",
                "Curricular internships arranged through university career offices",
            ]),
            eu_funding: lines(&[
                "Erasmus+ study and traineeship grants",
                "PNRR-funded scholarships in STEM disciplines",
            ]),
            national_funding: lines(&[
                "DSU regional grants covering fees, housing and meals",
                "University merit scholarships and fee waivers by ISEE income band",
            ]),
            low_income_support: lines(&[
                "Full fee exemption below the ISEE no-tax threshold",
                "Subsidised canteens and transport through regional DSU agencies",
            ]),
            note: Some(
                "Tuition at public universities is income-banded; low-income students often pay nothing."
                    .to_string(),
            ),
        },
    );

    map.insert(
        Country::Spain,
        CountryPathwayConfig {
            qualification_routes: lines(&[
                "Grado (Bachelor) programmes at public universities",
                "Formaci\u{f3}n Profesional Superior two-year vocational diplomas",
                "M\u{e1}ster universitario and doctoral programmes",
            ]),
            accommodation: lines(&[
                "Colegios mayores and university residences",
                "Shared flats, widely used and easy to find in student cities",
                "Homestays, popular for language-focused stays",
            ]),
            work_and_study: lines(&[
                "Students may work up to 30 hours per week under the student regime",
                "FP Dual places combine classroom study with paid company training",
            ]),
            eu_funding: lines(&[
                "Erasmus+ mobility grants",
                "EU youth employment initiative programmes in several regions",
            ]),
            national_funding: lines(&[
                "Becas MEC general scholarships, means- and merit-tested",
                "Regional government grants supplementing the state scheme",
            ]),
            low_income_support: lines(&[
                "Fee reductions and exemptions for large families and low-income households",
                "University social funds for emergency hardship",
            ]),
            note: None,
        },
    );

    map.insert(
        Country::Netherlands,
        CountryPathwayConfig {
            qualification_routes: lines(&[
                "HBO universities of applied sciences for profession-oriented Bachelors",
                "WO research universities for academic Bachelor and Master study",
                "Associate degrees, a two-year step between MBO and HBO",
            ]),
            accommodation: lines(&[
                "SSH student housing; register early, supply is tight nationwide",
                "Shared houses via housing corporations and private platforms",
                "Private studios, scarce and expensive in the Randstad",
            ]),
            work_and_study: lines(&[
                "EU students work freely; many combine study with part-time jobs",
                "Paid internships are standard in HBO programmes",
            ]),
            eu_funding: lines(&[
                "Erasmus+ grants for mobility",
                "Holland Scholarship co-funded by institutions for non-EEA students",
            ]),
            national_funding: lines(&[
                "Studiefinanciering loans and supplementary grants via DUO",
                "Tuition-fee loan covering the statutory fee in full",
            ]),
            low_income_support: lines(&[
                "Means-tested supplementary grant that converts to a gift on graduation",
                "Municipal support schemes for students with low-income parents",
            ]),
            note: Some(
                "The statutory tuition fee is halved in the first year for most first-time Bachelor students."
                    .to_string(),
            ),
        },
    );

    map.insert(
        Country::Ireland,
        CountryPathwayConfig {
            qualification_routes: lines(&[
                "Honours Bachelor degrees at universities and technological universities",
                "Post-Leaving Certificate (PLC) courses as a route into higher education",
                "Apprenticeships up to degree level in craft and professional fields",
            ]),
            accommodation: lines(&[
                "On-campus residences, limited and allocated early",
                "Purpose-built student accommodation in the larger cities",
                "Digs (lodging with a host family), a common lower-cost option",
            ]),
            work_and_study: lines(&[
                "EU students work without restriction; 20 hours per week is typical",
                "Work placements are built into many degree programmes",
            ]),
            eu_funding: lines(&[
                "Erasmus+ outgoing and incoming mobility grants",
                "EU co-funded Springboard+ places in targeted skills areas",
            ]),
            national_funding: lines(&[
                "SUSI grants covering fees and maintenance, means-tested",
                "Free Fees Initiative pays tuition for most first-time EU undergraduates",
            ]),
            low_income_support: lines(&[
                "Student Assistance Fund for students in financial difficulty",
                "1916 Bursary for students from under-represented groups",
            ]),
            note: Some(
                "Budget for the student contribution charge (up to \u{20ac}3,000) even where tuition is free."
                    .to_string(),
            ),
        },
    );

    map
});

static COST_OF_LIVING: Lazy<BTreeMap<Country, &'static str>> = Lazy::new(|| {
    BTreeMap::from([
        (
            Country::Austria,
            "Typical student budget \u{20ac}950-1,250 per month; Vienna sits at the upper end.",
        ),
        (
            Country::Belgium,
            "Typical student budget \u{20ac}850-1,150 per month; Brussels and Leuven cost more than Wallonia.",
        ),
        (
            Country::Czechia,
            "Typical student budget \u{20ac}600-900 per month; Prague is noticeably dearer than Brno.",
        ),
        (
            Country::Denmark,
            "Typical student budget \u{20ac}1,200-1,600 per month; Copenhagen is among Europe's priciest student cities.",
        ),
        (
            Country::Finland,
            "Typical student budget \u{20ac}900-1,200 per month; student housing foundations keep rents moderate.",
        ),
        (
            Country::France,
            "Typical student budget \u{20ac}900-1,300 per month; Paris far exceeds regional cities.",
        ),
        (
            Country::Germany,
            "Typical student budget \u{20ac}950-1,250 per month; Munich is the notable outlier.",
        ),
        (
            Country::Greece,
            "Typical student budget \u{20ac}600-850 per month, among the lowest in the euro area.",
        ),
        (
            Country::Ireland,
            "Typical student budget \u{20ac}1,200-1,700 per month; Dublin rents dominate the total.",
        ),
        (
            Country::Italy,
            "Typical student budget \u{20ac}800-1,100 per month; Milan costs far more than the south.",
        ),
        (
            Country::Netherlands,
            "Typical student budget \u{20ac}1,100-1,500 per month; housing scarcity pushes costs up.",
        ),
        (
            Country::Poland,
            "Typical student budget \u{20ac}550-800 per month; one of the EU's most affordable options.",
        ),
        (
            Country::Portugal,
            "Typical student budget \u{20ac}700-1,000 per month; Lisbon rents have risen sharply.",
        ),
        (
            Country::Spain,
            "Typical student budget \u{20ac}800-1,100 per month; Madrid and Barcelona at the top.",
        ),
        (
            Country::Sweden,
            "Typical student budget \u{20ac}1,000-1,400 per month; student-union housing queues are long.",
        ),
    ])
});

/// Countries covered by the procedurally generated generic bundle.
/// Currently every selectable country without a dedicated entry.
static TEMPLATED: Lazy<Vec<Country>> = Lazy::new(|| {
    Country::ALL
        .iter()
        .copied()
        .filter(|c| !DETAILED.contains_key(c))
        .collect()
});

/// Dedicated (hand-written) entry for a country, if one exists.
pub fn detailed(country: Country) -> Option<&'static CountryPathwayConfig> {
    DETAILED.get(&country)
}

/// Generic bundle generated from the country name, used where no dedicated
/// entry has been written yet.
pub fn generic_config(country: Country) -> CountryPathwayConfig {
    let name = country.label();
    CountryPathwayConfig {
        qualification_routes: vec![
            format!("Bachelor's and Master's programmes at {name}'s public universities"),
            "Short-cycle vocational diplomas recognised across the EU through EQF alignment"
                .to_string(),
            format!("Doctoral study at {name}'s research universities"),
        ],
        accommodation: vec![
            format!("University and state-supported student residences in {name}"),
            "Shared flats near campus, usually the most affordable private option".to_string(),
        ],
        work_and_study: vec![
            format!("EU students may work in {name} alongside study without a separate permit"),
            "Check institution career services for term-time work regulations".to_string(),
        ],
        eu_funding: vec![
            "Erasmus+ mobility grants for study periods and traineeships".to_string(),
        ],
        national_funding: vec![format!(
            "National study grants and loans administered by {name}'s education ministry"
        )],
        low_income_support: vec![format!(
            "Means-tested fee reductions and hardship funds; ask {name}'s student services"
        )],
        note: None,
    }
}

/// Full bundle for a country: dedicated entry if present, otherwise the
/// generic template. `None` only for countries covered by neither, kept as
/// an extensibility safety net rather than a reachable state today.
pub fn config_for(country: Country) -> Option<CountryPathwayConfig> {
    if let Some(cfg) = detailed(country) {
        return Some(cfg.clone());
    }
    if TEMPLATED.contains(&country) {
        return Some(generic_config(country));
    }
    None
}

/// Cost-of-living hint for a country.
pub fn cost_of_living_hint(country: Country) -> &'static str {
    COST_OF_LIVING
        .get(&country)
        .copied()
        .unwrap_or("Student living costs vary by city; check local student-union guidance.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_country_has_a_bundle_and_a_hint() {
        for country in Country::ALL {
            assert!(config_for(country).is_some(), "{country} has no bundle");
            assert!(cost_of_living_hint(country).contains("student") || cost_of_living_hint(country).contains("budget"));
        }
    }

    #[test]
    fn default_destinations_are_detailed_entries() {
        for country in DEFAULT_DESTINATIONS {
            assert!(detailed(country).is_some());
        }
    }
}
