//! SPARQL query construction.

/// Wikidata item for "city" (Q515); matched through instance-of/subclass-of.
const CITY_CLASS: &str = "wd:Q515";
/// Wikidata item for "metro station".
const METRO_STATION_CLASS: &str = "wd:Q928830";

/// The two queries issued per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SparqlQueries {
    /// City → subdivision (P150) → its own subdivision
    pub subdivisions: String,
    /// City ← metro stations located in it (P131)
    pub metro: String,
}

impl SparqlQueries {
    pub fn build(cities: &[String], language: &str) -> Self {
        let values = values_clause(cities, language);
        Self {
            subdivisions: subdivisions_query(&values, language),
            metro: metro_query(&values, language),
        }
    }
}

/// Render every city as a language-tagged literal, space separated.
pub fn values_clause(cities: &[String], language: &str) -> String {
    cities
        .iter()
        .map(|city| format!("\"{}\"@{}", escape_literal(city), language))
        .collect::<Vec<_>>()
        .join(" ")
}

fn escape_literal(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

fn subdivisions_query(values: &str, language: &str) -> String {
    format!(
        r#"
SELECT DISTINCT ?cityLabel ?subdivisionLabel ?districtLabel WHERE {{
  VALUES ?cityName {{ {values} }}
  ?city rdfs:label ?cityName;
        wdt:P31/wdt:P279* {CITY_CLASS}.
  OPTIONAL {{
    ?city wdt:P150 ?sub.
    ?sub rdfs:label ?subdivisionLabel.
    FILTER(LANG(?subdivisionLabel) = "{language}")
    OPTIONAL {{
      ?sub wdt:P150 ?district.
      ?district rdfs:label ?districtLabel.
      FILTER(LANG(?districtLabel) = "{language}")
    }}
  }}
  SERVICE wikibase:label {{ bd:serviceParam wikibase:language "{language}". ?city rdfs:label ?cityLabel. }}
}}
"#
    )
}

fn metro_query(values: &str, language: &str) -> String {
    format!(
        r#"
SELECT DISTINCT ?cityLabel ?metroLabel WHERE {{
  VALUES ?cityName {{ {values} }}
  ?city rdfs:label ?cityName;
        wdt:P31/wdt:P279* {CITY_CLASS}.
  OPTIONAL {{
    ?metro wdt:P31/wdt:P279* {METRO_STATION_CLASS};
           wdt:P131 ?city.
    ?metro rdfs:label ?metroLabel.
    FILTER(LANG(?metroLabel) = "{language}")
  }}
  SERVICE wikibase:label {{ bd:serviceParam wikibase:language "{language}". ?city rdfs:label ?cityLabel. }}
}}
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cities(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_values_clause_tags_language() {
        let values = values_clause(&cities(&["Москва", "Санкт-Петербург"]), "ru");
        assert_eq!(values, r#""Москва"@ru "Санкт-Петербург"@ru"#);
    }

    #[test]
    fn test_quotes_escaped_in_literal() {
        let values = values_clause(&cities(&[r#"Foo "Bar""#]), "en");
        assert_eq!(values, r#""Foo \"Bar\""@en"#);
    }

    #[test]
    fn test_subdivisions_query_shape() {
        let queries = SparqlQueries::build(&cities(&["Казань"]), "ru");
        let q = &queries.subdivisions;
        assert!(q.contains(r#"VALUES ?cityName { "Казань"@ru }"#));
        assert!(q.contains("SELECT DISTINCT ?cityLabel ?subdivisionLabel ?districtLabel"));
        assert!(q.contains("wdt:P31/wdt:P279* wd:Q515"));
        assert!(q.contains("?sub wdt:P150 ?district."));
        assert!(q.contains(r#"FILTER(LANG(?districtLabel) = "ru")"#));
        assert!(q.contains(r#"wikibase:language "ru""#));
        assert!(!q.contains("LIMIT"));
    }

    #[test]
    fn test_metro_query_shape() {
        let queries = SparqlQueries::build(&cities(&["Казань"]), "ru");
        let q = &queries.metro;
        assert!(q.contains("SELECT DISTINCT ?cityLabel ?metroLabel"));
        assert!(q.contains("wdt:P31/wdt:P279* wd:Q928830;"));
        assert!(q.contains("wdt:P131 ?city."));
        assert!(q.contains(r#"FILTER(LANG(?metroLabel) = "ru")"#));
    }
}
