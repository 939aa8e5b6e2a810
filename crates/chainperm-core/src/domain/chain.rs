use serde::Deserialize;

/// Chain expansion response from the pricing chains endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChainResponse {
    pub data: ChainData,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChainData {
    pub constituents: Vec<String>,
    #[serde(rename = "displayName", default)]
    pub display_name: Option<String>,
}

impl ChainResponse {
    pub fn constituents(&self) -> &[String] {
        &self.data.constituents
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_constituent_order() {
        let response: ChainResponse = serde_json::from_str(
            r#"{"universe":{"ric":".AV.O"},"data":{"constituents":["MSFT.O","AAPL.O","NVDA.O"]}}"#,
        )
        .expect("chain should decode");

        assert_eq!(response.constituents(), ["MSFT.O", "AAPL.O", "NVDA.O"]);
        assert_eq!(response.data.display_name, None);
    }

    #[test]
    fn empty_constituents_decode() {
        let response: ChainResponse =
            serde_json::from_str(r#"{"data":{"constituents":[],"displayName":"EMPTY"}}"#)
                .expect("chain should decode");

        assert!(response.constituents().is_empty());
        assert_eq!(response.data.display_name.as_deref(), Some("EMPTY"));
    }

    #[test]
    fn missing_constituents_is_rejected() {
        let result: Result<ChainResponse, _> = serde_json::from_str(r#"{"data":{}}"#);
        assert!(result.is_err());
    }
}
