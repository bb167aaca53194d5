use anyhow::bail;
use clap::Args;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;
use zonectl_application::use_cases::AddRRSetUseCase;
use zonectl_domain::{
    Config, FilterType, MetaResult, RRSet, RecordFilter, RecordMeta, ResourceRecord,
};

use crate::dry_run::DryRunZoneApi;

#[derive(Args)]
pub struct BuildArgs {
    /// Zone the record belongs to
    #[arg(short = 'z', long)]
    pub zone: String,

    /// Fully qualified record name
    #[arg(short = 'n', long)]
    pub name: String,

    /// Record type
    #[arg(short = 't', long = "type")]
    pub record_type: String,

    /// RRSet TTL in seconds (defaults to records.default_ttl)
    #[arg(long)]
    pub ttl: Option<u32>,

    /// Record text
    #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
    pub value: Vec<String>,

    /// `ip` meta, comma separated
    #[arg(long, value_delimiter = ',')]
    pub ip: Vec<String>,

    /// `asn` meta, comma separated
    #[arg(long, value_delimiter = ',')]
    pub asn: Vec<u64>,

    /// `latlong` meta, e.g. "(52.37,4.89)"
    #[arg(long)]
    pub latlong: Option<String>,

    #[arg(long)]
    pub note: Vec<String>,

    #[arg(long)]
    pub country: Vec<String>,

    #[arg(long)]
    pub continent: Vec<String>,

    /// Mark the record as the fallback answer
    #[arg(long)]
    pub default: bool,

    /// `cidr_labels` entry as label=N; repeatable
    #[arg(long = "cidr-label", value_parser = parse_cidr_label)]
    pub cidr_label: Vec<(String, i64)>,

    /// RRSet filter as kind:limit[:strict]; repeatable
    #[arg(long, value_parser = parse_filter)]
    pub filter: Vec<RecordFilter>,

    /// Create the record disabled
    #[arg(long)]
    pub disabled: bool,
}

impl BuildArgs {
    fn metas(&self) -> Vec<MetaResult> {
        let mut metas = Vec::new();
        if !self.ip.is_empty() {
            metas.push(RecordMeta::ip(self.ip.as_slice()));
        }
        if !self.asn.is_empty() {
            metas.push(RecordMeta::asn(&self.asn));
        }
        if let Some(latlong) = &self.latlong {
            metas.push(RecordMeta::latlong(latlong));
        }
        if !self.note.is_empty() {
            metas.push(RecordMeta::notes(self.note.as_slice()));
        }
        if !self.country.is_empty() {
            metas.push(RecordMeta::countries(self.country.as_slice()));
        }
        if !self.continent.is_empty() {
            metas.push(RecordMeta::continents(self.continent.as_slice()));
        }
        if self.default {
            metas.push(RecordMeta::default_flag());
        }
        if !self.cidr_label.is_empty() {
            let labels: HashMap<String, i64> = self.cidr_label.iter().cloned().collect();
            metas.push(RecordMeta::cidr_labels(&labels));
        }
        metas
    }

    /// Decodes the record text and attaches every meta that could be built.
    fn record(&self, enabled: bool) -> anyhow::Result<ResourceRecord> {
        let raw = self.value.join(" ");
        let mut record = ResourceRecord::from_text(&self.record_type, &raw);
        if !record.has_content() {
            bail!(
                "'{}' does not fit the field layout of {} records",
                raw,
                self.record_type.to_uppercase()
            );
        }
        record.set_enabled(enabled && !self.disabled);

        for meta in self.metas() {
            record.try_add_meta(meta);
        }
        Ok(record)
    }
}

fn parse_cidr_label(s: &str) -> Result<(String, i64), String> {
    let (label, number) = s
        .split_once('=')
        .ok_or_else(|| format!("expected label=N, got '{}'", s))?;
    let number = number
        .trim()
        .parse::<i64>()
        .map_err(|e| format!("invalid cidr label number '{}': {}", number, e))?;
    Ok((label.trim().to_string(), number))
}

fn parse_filter(s: &str) -> Result<RecordFilter, String> {
    let parts: Vec<&str> = s.split(':').collect();
    let (kind, limit, strict) = match parts.as_slice() {
        [kind, limit] => (*kind, *limit, false),
        [kind, limit, "strict"] => (*kind, *limit, true),
        _ => return Err(format!("expected kind:limit[:strict], got '{}'", s)),
    };
    let filter_type = kind.parse::<FilterType>().map_err(|e| e.to_string())?;
    let limit = limit
        .parse::<u32>()
        .map_err(|e| format!("invalid filter limit '{}': {}", limit, e))?;
    Ok(RecordFilter::new(filter_type, limit, strict))
}

pub async fn run(args: BuildArgs, config: &Config) -> anyhow::Result<()> {
    let record = args.record(config.records.enabled)?;

    let ttl = args.ttl.unwrap_or(config.records.default_ttl);
    let mut rrset = RRSet::new(ttl, vec![record]);
    rrset.add_filter(args.filter.iter().cloned());

    let api = Arc::new(DryRunZoneApi::new(config.api.clone()));
    let sent = AddRRSetUseCase::new(api)
        .execute(&args.zone, &args.name, &args.record_type, rrset)
        .await?;

    info!(
        records = sent.records.len(),
        filters = sent.filters.len(),
        ttl = sent.ttl,
        "RRSet built"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        build: BuildArgs,
    }

    fn parse(args: &[&str]) -> BuildArgs {
        let mut argv = vec!["zonectl", "-z", "example.com", "-n", "www.example.com", "-t", "A"];
        argv.extend_from_slice(args);
        TestCli::try_parse_from(argv).unwrap().build
    }

    #[test]
    fn test_parse_cidr_label() {
        assert_eq!(parse_cidr_label("office=10"), Ok(("office".to_string(), 10)));
        assert_eq!(parse_cidr_label(" office = 10 "), Ok(("office".to_string(), 10)));
        assert!(parse_cidr_label("office").is_err());
        assert!(parse_cidr_label("office=ten").is_err());
    }

    #[test]
    fn test_parse_filter() {
        assert_eq!(parse_filter("geodns:1"), Ok(RecordFilter::geodns(1, false)));
        assert_eq!(
            parse_filter("first_n:2:strict"),
            Ok(RecordFilter::first_n(2, true))
        );
        assert!(parse_filter("geodns").is_err());
        assert!(parse_filter("nearest:1").is_err());
        assert!(parse_filter("geodns:-1").is_err());
        assert!(parse_filter("geodns:1:loose").is_err());
    }

    #[test]
    fn test_metas_empty_without_flags() {
        let args = parse(&["1.2.3.4"]);
        assert!(args.metas().is_empty());
        assert_eq!(args.value, vec!["1.2.3.4"]);
    }

    #[test]
    fn test_metas_collects_every_flag() {
        let args = parse(&[
            "--ip",
            "1.1.1.1,2001:db8::1",
            "--asn",
            "1,2",
            "--latlong",
            "(1,2)",
            "--note",
            "primary",
            "--country",
            "nl",
            "--continent",
            "eu",
            "--default",
            "--cidr-label",
            "office=1",
            "1.2.3.4",
        ]);
        let metas = args.metas();
        assert_eq!(metas.len(), 8);
        assert!(metas.iter().all(|m| m.is_ok()));
    }

    #[test]
    fn test_metas_keeps_failures_for_reporting() {
        let args = parse(&["--ip", "nope", "--latlong", "1", "1.2.3.4"]);
        let metas = args.metas();
        assert_eq!(metas.len(), 2);
        assert!(metas.iter().all(|m| m.is_err()));
    }

    #[test]
    fn test_record_attaches_valid_metas_only() {
        let args = parse(&[
            "--ip",
            "nope",
            "--latlong",
            "NaN,1",
            "--note",
            "primary",
            "--default",
            "1.2.3.4",
        ]);
        let record = args.record(true).unwrap();

        assert_eq!(record.content_string(), "1.2.3.4");
        assert!(record.enabled);
        assert_eq!(record.meta.len(), 2);
        assert_eq!(record.meta["notes"], serde_json::json!(["primary"]));
        assert_eq!(record.meta["default"], serde_json::json!(true));
    }

    #[test]
    fn test_record_rejects_content_that_does_not_fit() {
        let mut args = parse(&["mail.example.com"]);
        args.record_type = "MX".to_string();
        assert!(args.record(true).is_err());
    }

    #[test]
    fn test_record_disabled_flag() {
        let args = parse(&["--disabled", "1.2.3.4"]);
        assert!(!args.record(true).unwrap().enabled);
        assert!(!parse(&["1.2.3.4"]).record(false).unwrap().enabled);
    }

    #[test]
    fn test_filters_and_value_parse() {
        let args = parse(&[
            "--filter",
            "geodistance:1",
            "--filter",
            "default:1:strict",
            "10",
            "mail.example.com",
        ]);
        assert_eq!(
            args.filter,
            vec![
                RecordFilter::geodistance(1, false),
                RecordFilter::default_filter(1, true)
            ]
        );
        assert_eq!(args.value.join(" "), "10 mail.example.com");
    }
}
