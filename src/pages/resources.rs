//! Curated learning resources grouped by subject.

#[cfg(test)]
#[path = "resources_test.rs"]
mod resources_test;

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Resource {
    pub title: &'static str,
    pub subject: &'static str,
    pub description: &'static str,
    pub url: &'static str,
}

pub const RESOURCES: &[Resource] = &[
    Resource {
        title: "Khan Academy: Algebra",
        subject: "Mathematics",
        description: "Video lessons and practice for algebra basics.",
        url: "https://www.khanacademy.org/math/algebra",
    },
    Resource {
        title: "OpenStax Biology 2e",
        subject: "Science",
        description: "Free peer-reviewed biology textbook.",
        url: "https://openstax.org/details/books/biology-2e",
    },
    Resource {
        title: "Purdue OWL",
        subject: "Writing",
        description: "Guides on essay structure, grammar and citation.",
        url: "https://owl.purdue.edu/",
    },
    Resource {
        title: "CS50",
        subject: "Computing",
        description: "Harvard's introduction to computer science.",
        url: "https://cs50.harvard.edu/x/",
    },
    Resource {
        title: "Desmos Graphing Calculator",
        subject: "Mathematics",
        description: "Interactive graphing in the browser.",
        url: "https://www.desmos.com/calculator",
    },
];

/// Distinct subjects in first-appearance order.
pub fn subjects(resources: &[Resource]) -> Vec<&'static str> {
    let mut out: Vec<&'static str> = Vec::new();
    for resource in resources {
        if !out.contains(&resource.subject) {
            out.push(resource.subject);
        }
    }
    out
}

pub fn resources_for(resources: &[Resource], subject: &str) -> Vec<Resource> {
    resources.iter().filter(|r| r.subject == subject).copied().collect()
}

#[component]
pub fn ResourcesPage() -> impl IntoView {
    view! {
        <section class="resources">
            <h1>"Resources"</h1>
            {subjects(RESOURCES)
                .into_iter()
                .map(|subject| {
                    view! {
                        <div class="resources__group">
                            <h2>{subject}</h2>
                            <ul>
                                {resources_for(RESOURCES, subject)
                                    .into_iter()
                                    .map(|resource| {
                                        view! {
                                            <li class="resource">
                                                <a href=resource.url target="_blank" rel="noopener noreferrer">
                                                    {resource.title}
                                                </a>
                                                <p>{resource.description}</p>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        </div>
                    }
                })
                .collect_view()}
        </section>
    }
}
