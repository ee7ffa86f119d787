use tera::{Context, Tera};

use crate::context::SummaryContext;
use crate::error::ExportError;

/// Built-in clinical summary layout, in the Markdown-ish subset understood
/// by [`crate::docx::generate_docx`].
pub const DEFAULT_SUMMARY_TEMPLATE: &str = r#"# Clinical Record
**{{ patient_type }}{% if pediatric_sub_type %} ({{ pediatric_sub_type }}){% endif %}** {{ generated_on }}

## Identification
- **Name:** {% if identification.name %}{{ identification.name }}{% else %}N/A{% endif %}
- **Age:** {% if identification.age %}{{ identification.age }}{% else %}N/A{% endif %}
- **Sex:** {% if identification.sex %}{{ identification.sex }}{% else %}N/A{% endif %}
- **Occupation:** {% if identification.occupation %}{{ identification.occupation }}{% else %}N/A{% endif %}
{% if identification.guardian %}- **Guardian:** {{ identification.guardian }}
{% endif %}{% if identification.caregiver %}- **Caregiver:** {{ identification.caregiver }}
{% endif %}
{% if soap %}
## Subjective
{% for item in soap.subjective %}- **{{ item.label }}:** {{ item.text }}
{% endfor %}
## Objective
{% if soap.objective %}{{ soap.objective }}{% else %}Not recorded.{% endif %}

## Assessment and Plan
{% if soap.problems %}{% for problem in soap.problems %}### {{ problem.id }}. {{ problem.text }}
{% for plan in problem.plans %}- **{{ plan.category }}:** {{ plan.text }}
{% endfor %}{% endfor %}{% else %}No problems listed.
{% endif %}
{% else %}
## History
{% if chief_complaint %}**Chief complaint:** {{ chief_complaint }}
{% endif %}
**History of present illness:**
{% if present_illness %}{{ present_illness }}{% else %}Not reported.{% endif %}
{% if systems_review %}
### Systems Review
{% for item in systems_review %}- **{{ item.label }}:** {{ item.text }}
{% endfor %}{% endif %}{% if antecedents %}
### Antecedents
{% for item in antecedents %}- **{{ item.label }}:** {{ item.text }}
{% endfor %}{% endif %}
{% endif %}
## Vital Signs and Anthropometry
{% for line in vitals %}- **{{ line.label }}:** {{ line.value }}{% if line.interpretation.label %} ({{ line.interpretation.label }}){% endif %}
{% endfor %}{% for line in anthropometry %}- **{{ line.label }}:** {{ line.value }}{% if line.z_score %} (z {{ line.z_score }}{% if line.color == "danger" %}, outside 2 SD{% endif %}){% endif %}
{% endfor %}
## Physical Exam
{% if exam %}{% for item in exam %}- **{{ item.label }}:** {{ item.text }}
{% endfor %}{% else %}Not recorded.
{% endif %}
{% if frailty or cardiovascular %}
## Risk Assessments
{% if frailty %}- **IVCF-20:** {{ frailty.score }} points, {{ frailty.result_text }}
{% endif %}{% if cardiovascular %}- **Cardiovascular risk ({{ cardiovascular.level | replace(from="_", to=" ") }}):** {{ cardiovascular.summary }}
{% endif %}{% endif %}
{% if diagnostic_hypothesis or risk_factors %}
## Synthesis
{% if diagnostic_hypothesis %}**Diagnostic hypothesis:** {{ diagnostic_hypothesis }}
{% endif %}{% if risk_factors %}**Risk factors:** {{ risk_factors }}
{% endif %}{% endif %}
## Plan of Care
{% if plan_of_care %}{{ plan_of_care }}{% else %}Pending.{% endif %}

## Signatures
- **Student:** ________________
- **Preceptor:** ________________
"#;

/// Render a summary template against a record's context.
///
/// The `template` is the raw template string (Jinja2 syntax). The context
/// fields become the template variables.
pub fn render_summary(
    template_name: &str,
    template: &str,
    context: &SummaryContext,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    // Convert the context to a Tera context via serde_json
    let value = serde_json::to_value(context)?;
    let context = Context::from_value(value)
        .map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(template_name, &context)?;
    tracing::debug!(template = template_name, bytes = rendered.len(), "summary rendered");
    Ok(rendered)
}
