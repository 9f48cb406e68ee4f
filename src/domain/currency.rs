//! ISO 4217 alphabetic currency codes.

/// Current alphabetic codes plus the withdrawn or transitional ANG, CUC, SLL
/// and ZWL still found in shop data. Kept sorted for binary search.
const ISO_4217_CODES: &[&str] = &[
    "AED", "AFN", "ALL", "AMD", "ANG", "AOA", "ARS", "AUD", "AWG", "AZN",
    "BAM", "BBD", "BDT", "BGN", "BHD", "BIF", "BMD", "BND", "BOB", "BOV", "BRL", "BSD", "BTN", "BWP", "BYN", "BZD",
    "CAD", "CDF", "CHE", "CHF", "CHW", "CLF", "CLP", "CNY", "COP", "COU", "CRC", "CUC", "CUP", "CVE", "CZK",
    "DJF", "DKK", "DOP", "DZD",
    "EGP", "ERN", "ETB", "EUR",
    "FJD", "FKP",
    "GBP", "GEL", "GHS", "GIP", "GMD", "GNF", "GTQ", "GYD",
    "HKD", "HNL", "HTG", "HUF",
    "IDR", "ILS", "INR", "IQD", "IRR", "ISK",
    "JMD", "JOD", "JPY",
    "KES", "KGS", "KHR", "KMF", "KPW", "KRW", "KWD", "KYD", "KZT",
    "LAK", "LBP", "LKR", "LRD", "LSL", "LYD",
    "MAD", "MDL", "MGA", "MKD", "MMK", "MNT", "MOP", "MRU", "MUR", "MVR", "MWK", "MXN", "MXV", "MYR", "MZN",
    "NAD", "NGN", "NIO", "NOK", "NPR", "NZD",
    "OMR",
    "PAB", "PEN", "PGK", "PHP", "PKR", "PLN", "PYG",
    "QAR",
    "RON", "RSD", "RUB", "RWF",
    "SAR", "SBD", "SCR", "SDG", "SEK", "SGD", "SHP", "SLE", "SLL", "SOS", "SRD", "SSP", "STN", "SVC", "SYP", "SZL",
    "THB", "TJS", "TMT", "TND", "TOP", "TRY", "TTD", "TWD", "TZS",
    "UAH", "UGX", "USD", "USN", "UYI", "UYU", "UYW", "UZS",
    "VED", "VES", "VND", "VUV",
    "WST",
    "XAF", "XAG", "XAU", "XBA", "XBB", "XBC", "XBD", "XCD", "XCG", "XDR", "XOF", "XPD", "XPF", "XPT", "XSU", "XTS", "XUA", "XXX",
    "YER",
    "ZAR", "ZMW", "ZWG", "ZWL",
];

/// Returns `true` when `code` names an ISO 4217 currency.
///
/// Surrounding whitespace is ignored and the comparison is case-insensitive,
/// so `"nok"`, `"NOK"` and `" NOK "` are all accepted.
pub fn is_iso4217_code(code: Option<&str>) -> bool {
    let Some(code) = code.map(str::trim).filter(|c| !c.is_empty()) else {
        return false;
    };

    let normalized = code.to_uppercase();
    ISO_4217_CODES.binary_search(&normalized.as_str()).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_sorted_and_unique() {
        assert!(ISO_4217_CODES.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(ISO_4217_CODES.iter().all(|code| code.len() == 3));
    }

    #[test]
    fn accepts_codes_in_any_case() {
        assert!(is_iso4217_code(Some("NOK")));
        assert!(is_iso4217_code(Some("nok")));
        assert!(is_iso4217_code(Some("Eur")));
        assert!(is_iso4217_code(Some(" NOK ")));
        assert!(is_iso4217_code(Some("USD")));
        assert!(is_iso4217_code(Some("AED")));
        assert!(is_iso4217_code(Some("ZWG")));
    }

    #[test]
    fn keeps_withdrawn_codes_still_in_use() {
        for code in ["ANG", "CUC", "SLL", "ZWL"] {
            assert!(is_iso4217_code(Some(code)), "{code} should be accepted");
        }
        assert!(is_iso4217_code(Some("XCG")));
        assert!(is_iso4217_code(Some("ZWG")));
    }

    #[test]
    fn rejects_blank_and_unknown_codes() {
        assert!(!is_iso4217_code(None));
        assert!(!is_iso4217_code(Some("")));
        assert!(!is_iso4217_code(Some("   ")));
        assert!(!is_iso4217_code(Some("XXX-not-real")));
        assert!(!is_iso4217_code(Some("ABC")));
        assert!(!is_iso4217_code(Some("US")));
    }
}
