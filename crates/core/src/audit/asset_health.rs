//! Asset health sweep.

use chrono::Duration;
use serde_json::json;
use url::Url;

use super::{audit_types, entity_types, AssetSnapshot, AuditFinding, Severity};
use crate::types::Timestamp;

/// Scan product assets for health problems.
///
/// Only active assets are considered; inactive assets are excluded from
/// every check. Three independent checks run in order: invalid URL
/// (critical), image missing alt text (warning), and stale or missing
/// last-checked timestamp (info). One asset can produce several findings.
///
/// `now` is injected so the staleness cutoff is deterministic.
pub fn scan_asset_health(
    assets: &[AssetSnapshot],
    stale_days: i64,
    now: Timestamp,
) -> Vec<AuditFinding> {
    let mut findings = Vec::new();

    for asset in assets.iter().filter(|a| a.is_active) {
        if !is_valid_url(&asset.url) {
            findings.push(AuditFinding {
                audit_type: audit_types::BROKEN_ASSET,
                severity: Severity::Critical,
                entity_type: entity_types::PRODUCT_ASSET,
                entity_id: asset.id,
                details: json!({
                    "message": "Invalid URL format",
                    "url": asset.url,
                    "asset_type": asset.asset_type,
                    "product_id": asset.product_id,
                }),
            });
        }
    }

    for asset in assets.iter().filter(|a| a.is_active) {
        let missing_alt = asset
            .alt_text
            .as_deref()
            .map_or(true, |alt| alt.is_empty());
        if asset.asset_type == "image" && missing_alt {
            findings.push(AuditFinding {
                audit_type: audit_types::BROKEN_ASSET,
                severity: Severity::Warning,
                entity_type: entity_types::PRODUCT_ASSET,
                entity_id: asset.id,
                details: json!({
                    "message": "Missing alt text for image",
                    "url": asset.url,
                    "product_id": asset.product_id,
                }),
            });
        }
    }

    let cutoff = now - Duration::days(stale_days);
    for asset in assets.iter().filter(|a| a.is_active) {
        let stale = match asset.last_checked_at {
            None => true,
            Some(checked) => checked < cutoff,
        };
        if !stale {
            continue;
        }
        let days_since_check = asset.last_checked_at.map(|c| (now - c).num_days());
        findings.push(AuditFinding {
            audit_type: audit_types::BROKEN_ASSET,
            severity: Severity::Info,
            entity_type: entity_types::PRODUCT_ASSET,
            entity_id: asset.id,
            details: json!({
                "message": "Asset not checked recently",
                "url": asset.url,
                "last_checked_at": asset
                    .last_checked_at
                    .map(|c| c.format("%Y-%m-%d %H:%M:%S").to_string()),
                "days_since_check": days_since_check,
                "threshold_days": stale_days,
                "product_id": asset.product_id,
            }),
        });
    }

    findings
}

/// A usable asset URL must use the http or https scheme and pass general
/// URL parsing with a host.
fn is_valid_url(url: &str) -> bool {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return false;
    }
    match Url::parse(url) {
        Ok(parsed) => parsed.host_str().is_some(),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::DEFAULT_STALE_DAYS;
    use chrono::Utc;

    fn asset(id: i64, url: &str) -> AssetSnapshot {
        AssetSnapshot {
            id,
            product_id: 10,
            asset_type: "image".to_string(),
            url: url.to_string(),
            alt_text: Some("A product photo".to_string()),
            is_active: true,
            last_checked_at: Some(Utc::now()),
        }
    }

    #[test]
    fn invalid_url_is_critical() {
        let assets = vec![asset(1, "ftp://cdn.example.com/img.png")];
        let findings = scan_asset_health(&assets, DEFAULT_STALE_DAYS, Utc::now());

        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Critical);
        assert_eq!(findings[0].details["message"], "Invalid URL format");
    }

    #[test]
    fn url_without_host_is_invalid() {
        let assets = vec![asset(2, "https://")];
        let findings = scan_asset_health(&assets, DEFAULT_STALE_DAYS, Utc::now());
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].details["message"], "Invalid URL format");
    }

    #[test]
    fn well_formed_url_passes() {
        let assets = vec![asset(3, "https://cdn.example.com/img.png")];
        assert!(scan_asset_health(&assets, DEFAULT_STALE_DAYS, Utc::now()).is_empty());
    }

    #[test]
    fn image_missing_alt_text_is_warning() {
        let mut a = asset(4, "https://cdn.example.com/img.png");
        a.alt_text = None;
        let mut b = asset(5, "https://cdn.example.com/img2.png");
        b.alt_text = Some(String::new());

        let findings = scan_asset_health(&[a, b], DEFAULT_STALE_DAYS, Utc::now());
        assert_eq!(findings.len(), 2);
        assert!(findings
            .iter()
            .all(|f| f.details["message"] == "Missing alt text for image"));
        assert!(findings.iter().all(|f| f.severity == Severity::Warning));
    }

    #[test]
    fn non_image_assets_skip_alt_text_check() {
        let mut a = asset(6, "https://cdn.example.com/manual.pdf");
        a.asset_type = "document".to_string();
        a.alt_text = None;
        assert!(scan_asset_health(&[a], DEFAULT_STALE_DAYS, Utc::now()).is_empty());
    }

    #[test]
    fn stale_check_reports_days_since_check() {
        let now = Utc::now();
        let mut a = asset(7, "https://cdn.example.com/img.png");
        a.last_checked_at = Some(now - Duration::days(45));

        let findings = scan_asset_health(&[a], 30, now);
        assert_eq!(findings.len(), 1);
        let f = &findings[0];
        assert_eq!(f.severity, Severity::Info);
        assert_eq!(f.details["message"], "Asset not checked recently");
        assert_eq!(f.details["days_since_check"], 45);
        assert_eq!(f.details["threshold_days"], 30);
    }

    #[test]
    fn never_checked_asset_reports_null_days() {
        let mut a = asset(8, "https://cdn.example.com/img.png");
        a.last_checked_at = None;

        let findings = scan_asset_health(&[a], 30, Utc::now());
        assert_eq!(findings.len(), 1);
        assert!(findings[0].details["days_since_check"].is_null());
        assert!(findings[0].details["last_checked_at"].is_null());
    }

    #[test]
    fn recently_checked_asset_is_not_stale() {
        let now = Utc::now();
        let mut a = asset(9, "https://cdn.example.com/img.png");
        a.last_checked_at = Some(now - Duration::days(5));
        assert!(scan_asset_health(&[a], 30, now).is_empty());
    }

    #[test]
    fn inactive_asset_is_excluded_from_every_check() {
        // Broken URL, no alt text, never checked: still zero findings.
        let mut a = asset(10, "not-a-url");
        a.alt_text = None;
        a.last_checked_at = None;
        a.is_active = false;

        assert!(scan_asset_health(&[a], 30, Utc::now()).is_empty());
    }

    #[test]
    fn one_asset_can_fire_multiple_checks() {
        let mut a = asset(11, "nota url");
        a.alt_text = None;
        a.last_checked_at = None;

        let findings = scan_asset_health(&[a], 30, Utc::now());
        assert_eq!(findings.len(), 3);
        let severities: Vec<_> = findings.iter().map(|f| f.severity).collect();
        assert_eq!(
            severities,
            vec![Severity::Critical, Severity::Warning, Severity::Info]
        );
    }
}
