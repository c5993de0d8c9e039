// Copyright 2025 Memophor Labs
// SPDX-License-Identifier: Apache-2.0

use std::collections::HashMap;

use crate::model::{ClusterName, RequestId, SimplifiedRuleHit};

/// Results per request, or `None` for a cluster known to have no results at all.
pub(super) type ResultsByRequest = Option<HashMap<RequestId, Vec<SimplifiedRuleHit>>>;

fn hit(rule_fqdn: &str, error_key: &str, total_risk: u8) -> SimplifiedRuleHit {
    SimplifiedRuleHit {
        rule_fqdn: rule_fqdn.to_string(),
        error_key: error_key.to_string(),
        description: "Lorem ipsum...".to_string(),
        total_risk,
    }
}

fn results(entries: &[(&str, &[&SimplifiedRuleHit])]) -> HashMap<RequestId, Vec<SimplifiedRuleHit>> {
    entries
        .iter()
        .map(|(request_id, hits)| {
            (
                RequestId::new_unchecked(*request_id),
                hits.iter().map(|hit| (*hit).clone()).collect(),
            )
        })
        .collect()
}

pub(super) fn load() -> HashMap<ClusterName, ResultsByRequest> {
    let nodes_requirements = hit(
        "ccx_rules_ocp.external.rules.nodes_requirements_check.report",
        "NODES_MINIMUM_REQUIREMENTS_NOT_MET",
        1,
    );
    let samples_short = hit(
        "samples_op_failed_image_import_check.report",
        "SAMPLES_FAILED_IMAGE_IMPORT_ERR",
        2,
    );
    let bug = hit(
        "ccx_rules_ocp.external.bug_rules.bug_1766907.report",
        "BUGZILLA_BUG_1766907",
        3,
    );
    let kubelet = hit(
        "ccx_rules_ocp.external.rules.nodes_kubelet_version_check.report",
        "NODE_KUBELET_VERSION",
        4,
    );
    let samples = hit(
        "ccx_rules_ocp.external.rules.samples_op_failed_image_import_check.report",
        "SAMPLES_FAILED_IMAGE_IMPORT_ERR",
        5,
    );

    // The first set is keyed by request IDs that belong to ...a266 while being
    // stored under ...a267. Clients rely on that pairing.
    let first = results(&[
        ("3nl2vda87ld6e3s25jlk7n2dna", &[&nodes_requirements, &samples_short]),
        ("18njbjudvkc521w8buicx2clri", &[&samples_short, &bug]),
        (
            "38584huk209q82uhl8md5gsdxr",
            &[&nodes_requirements, &samples_short, &bug, &kubelet, &samples],
        ),
    ]);

    let second = results(&[
        ("1zlcewj4kjtsp37x0yyr6cwhgr", &[&nodes_requirements]),
        ("3m3imli92shw225d4c3glzycxq", &[&samples_short]),
        ("13yqlst6dmdji2z717w2v5fwcp", &[&nodes_requirements, &samples_short]),
        ("271w1b53jlfjq2axaetgpe0yrd", &[&samples_short, &bug]),
        (
            "32zr43d2a4cbq1ogi1eu3hrti1",
            &[&nodes_requirements, &samples_short, &bug, &kubelet, &samples],
        ),
        ("3pyjpvp4umqwx1xnhdq3mwgzkh", &[&samples]),
    ]);

    HashMap::from([
        (
            ClusterName::new_unchecked("34c3ecc5-624a-49a5-bab8-4fdc5e51a267"),
            Some(first),
        ),
        (
            ClusterName::new_unchecked("74ae54aa-6577-4e80-85e7-697cb646ff37"),
            Some(second),
        ),
        (
            ClusterName::new_unchecked("eeeeeeee-eeee-eeee-eeee-000000000001"),
            None,
        ),
    ])
}
