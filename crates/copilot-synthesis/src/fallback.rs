//! Rule-based solutions used when no generative provider answers.

use copilot_core::constants::MAX_FALLBACK_REFERENCES;
use copilot_core::models::{CategoryFamily, SearchResult, SuggestedSolution, Ticket};

struct Template {
    title: &'static str,
    description: &'static str,
    steps: &'static [&'static str],
    confidence: f64,
}

const NETWORK: &[Template] = &[
    Template {
        title: "Check Network Configuration and Connectivity",
        description: "Verify network settings and test connectivity to locate the fault",
        steps: &[
            "Open the network settings on the affected device",
            "Inspect the IP configuration with 'ipconfig /all' (Windows) or 'ip addr' (Linux/Mac)",
            "Confirm the DNS servers point at valid resolvers",
            "Ping an external address such as 8.8.8.8 to test internet access",
            "Run 'nslookup' against a known host to test name resolution",
            "Restart the network adapter or the router if the problem persists",
        ],
        confidence: 0.85,
    },
    Template {
        title: "Update Network Drivers",
        description: "Make sure the network adapter driver is current",
        steps: &[
            "Open Device Manager (Windows) or the system settings (Mac/Linux)",
            "Find the network adapter entry",
            "Choose to update the driver and let the system search for the latest version",
            "Reboot once the driver update completes",
        ],
        confidence: 0.78,
    },
];

const HARDWARE: &[Template] = &[Template {
    title: "Hardware Diagnostics and Troubleshooting",
    description: "Run hardware diagnostics to isolate the faulty component",
    steps: &[
        "Check every physical connection: power, data cables and peripherals",
        "Run the vendor's built-in diagnostics from the boot menu",
        "Look for devices flagged with warnings in Device Manager",
        "Watch system temperatures and fan speeds",
        "Swap in known-good parts where available",
        "Record any error codes or beep patterns for escalation",
    ],
    confidence: 0.80,
}];

const SOFTWARE: &[Template] = &[
    Template {
        title: "Software Installation and Configuration",
        description: "Resolve installation or configuration problems",
        steps: &[
            "Confirm the system meets the software's minimum requirements",
            "Run the installer with administrator rights",
            "Pause endpoint protection temporarily during installation",
            "Remove conflicting software or older versions",
            "Read the installer logs for the specific error",
            "Retry with a clean installation",
        ],
        confidence: 0.82,
    },
    Template {
        title: "Application Troubleshooting",
        description: "Resolve application crashes or misbehavior",
        steps: &[
            "Clear the application's cache and temporary files",
            "Reset the application settings to their defaults",
            "Update the application to the latest release",
            "Check the system event logs for related errors",
            "Reinstall the application if the issue persists",
        ],
        confidence: 0.75,
    },
];

const GENERAL: &[Template] = &[Template {
    title: "General Troubleshooting Steps",
    description: "Standard approach for diagnosing IT issues",
    steps: &[
        "Restart the affected device or application",
        "Check for recent system or software updates",
        "Review system logs and error messages",
        "Verify the user's permissions and access rights",
        "Reproduce the issue under another account or in safe mode",
        "Document symptoms and steps taken, then escalate if needed",
    ],
    confidence: 0.70,
}];

fn templates_for(family: CategoryFamily) -> &'static [Template] {
    match family {
        CategoryFamily::Network => NETWORK,
        CategoryFamily::Hardware => HARDWARE,
        CategoryFamily::Software => SOFTWARE,
        CategoryFamily::Other => GENERAL,
    }
}

/// Titles of the first distinct retrieved documents, in rank order.
pub fn reference_titles(results: &[SearchResult]) -> Vec<String> {
    let mut titles: Vec<String> = Vec::with_capacity(MAX_FALLBACK_REFERENCES);
    for result in results {
        if titles.len() == MAX_FALLBACK_REFERENCES {
            break;
        }
        if !titles.contains(&result.document.title) {
            titles.push(result.document.title.clone());
        }
    }
    titles
}

/// Template solutions for the ticket's category family, each referencing the
/// retrieved documents. Always one or two solutions.
pub fn rule_based_solutions(ticket: &Ticket, results: &[SearchResult]) -> Vec<SuggestedSolution> {
    let references = reference_titles(results);
    templates_for(ticket.category.family())
        .iter()
        .map(|t| SuggestedSolution {
            title: t.title.to_string(),
            description: t.description.to_string(),
            steps: t.steps.iter().map(|s| s.to_string()).collect(),
            references: references.clone(),
            confidence: t.confidence,
        })
        .collect()
}
