//! `hzc cluster` operations.

use super::ClusterAction;
use crate::config::Config;
use crate::errors::CommandError;
use crate::format::{format_enabled, format_field, format_heading, format_optional, mask_secret};

pub(crate) fn handle_cluster(action: &ClusterAction, config: &Config) -> Result<(), CommandError> {
    match action {
        ClusterAction::Info => {
            for line in connection_summary(config) {
                println!("{line}");
            }
            Ok(())
        }
    }
}

/// Describes the connection target without contacting the cluster.
fn connection_summary(config: &Config) -> Vec<String> {
    let client = &config.hazelcast;
    let cluster = &client.cluster;
    let mut lines = vec![
        format_heading("Cluster"),
        format_field("name", &cluster.name),
        format_field("client", &client.client_name),
        format_field("addresses", &cluster.network.addresses.join(", ")),
        format_field("unisocket", &format_enabled(cluster.unisocket)),
        format_field("cloud", &format_enabled(cluster.cloud.enabled)),
    ];
    if cluster.cloud.enabled {
        lines.push(format_field("token", &mask_secret(&cluster.cloud.token)));
    }
    lines.push(format_field("tls", &format_enabled(config.ssl.enabled)));
    lines.push(format_field(
        "tls server",
        &format_optional(&config.ssl.server_name),
    ));
    lines.push(format_field("log level", client.logger.level.as_str()));
    lines
}
