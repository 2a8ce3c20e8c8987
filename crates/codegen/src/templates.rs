use std::collections::HashMap;

use formwork_core::FormworkError;

/// Render a textual skeleton by replacing `{{key}}` placeholders from
/// the context. Placeholders carry no inner whitespace, so Django's
/// own `{{ variable }}` and `{% tag %}` syntax passes through
/// untouched; that is the reason the artifacts are rendered with this
/// substitution engine and not a general template engine.
pub fn render_template(
    template: &str,
    context: &HashMap<&str, String>,
) -> Result<String, FormworkError> {
    let mut result = template.to_string();

    for (key, value) in context {
        let placeholder = format!("{{{{{}}}}}", key);
        result = result.replace(&placeholder, value);
    }

    Ok(result)
}

/// Shared page skeleton all generated templates extend. Written once;
/// an existing (possibly user-customized) file is left alone.
pub static BASE_LAYOUT_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>{% block title %}{{app}}{% endblock %}</title>
    <style>
        body { background: #121212; color: #e0e0e0; font-family: system-ui, sans-serif; margin: 2rem; }
        a { color: #64b5f6; }
        h2 { color: #ffffff; }
        table { border-collapse: collapse; width: 100%; margin: 1rem 0; }
        th, td { border: 1px solid #333; padding: 0.5rem 0.75rem; text-align: left; }
        th { background: #1e1e1e; }
        tr:nth-child(even) { background: #1a1a1a; }
        .filter-panel { background: #1e1e1e; border: 1px solid #333; padding: 0.75rem; margin: 1rem 0; }
        .filter-panel summary { cursor: pointer; }
        .filter-panel input { display: block; margin: 0.25rem 0; }
        input, button { background: #2a2a2a; color: #e0e0e0; border: 1px solid #444; padding: 0.4rem 0.6rem; }
        button { cursor: pointer; }
    </style>
</head>
<body>
    {% block content %}{% endblock %}
</body>
</html>
"#;

pub static LIST_TEMPLATE: &str = r#"{% extends 'base.html' %}

{% block title %}{{name}} List{% endblock %}

{% block content %}
<h2>{{name}} List</h2>

<details class="filter-panel">
    <summary>Filter</summary>
    <form method="GET">
{{filter_inputs}}        <button type="submit">Apply</button>
    </form>
</details>

<table>
    <thead>
        <tr>
{{header_cells}}        </tr>
    </thead>
    <tbody>
        {% for obj in object_list %}
        <tr>
{{value_cells}}        </tr>
        {% empty %}
        <tr><td colspan="{{colspan}}">No entries yet.</td></tr>
        {% endfor %}
    </tbody>
</table>

<p><a href="{% url '{{app}}:{{route}}_create' %}">New {{name}}</a></p>
{% endblock %}
"#;

pub static DETAIL_TEMPLATE: &str = r#"{% extends 'base.html' %}

{% block title %}{{name}} Detail{% endblock %}

{% block content %}
<h2>{{name}} Detail</h2>

<table>
{{detail_rows}}</table>

<p><a href="{% url '{{app}}:{{route}}_list' %}">Back to list</a></p>
{% endblock %}
"#;

pub static FORM_TEMPLATE: &str = r#"{% extends 'base.html' %}

{% block title %}{{name}} Form{% endblock %}

{% block content %}
<h2>{{name}} Form</h2>

<form method="POST">
    {% csrf_token %}
    {{ form.as_p }}
    <button type="submit">Save</button>
</form>
{% endblock %}
"#;

pub static CONFIRM_DELETE_TEMPLATE: &str = r#"{% extends 'base.html' %}

{% block title %}Delete {{name}}{% endblock %}

{% block content %}
<h2>Really delete this {{name}}?</h2>

<form method="POST">
    {% csrf_token %}
    <button type="submit">Delete</button>
    <a href="{% url '{{app}}:{{route}}_list' %}">Cancel</a>
</form>
{% endblock %}
"#;

pub static FORMS_HEADER: &str = r#"from django import forms

from .models import *
"#;

pub static FORM_BLOCK_TEMPLATE: &str = r#"class {{name}}Form(forms.ModelForm):
    class Meta:
        model = {{name}}
        fields = [{{fields}}]"#;

pub static VIEWS_HEADER: &str = r#"from django.urls import reverse_lazy
from django.views.generic import (
    CreateView,
    DeleteView,
    DetailView,
    ListView,
    UpdateView,
)

from .forms import *
from .models import *
"#;

pub static VIEW_BLOCK_TEMPLATE: &str = r#"class {{name}}ListView(ListView):
    model = {{name}}
    template_name = '{{app}}/{{route}}_list.html'
    context_object_name = 'object_list'


class {{name}}DetailView(DetailView):
    model = {{name}}
    template_name = '{{app}}/{{route}}_detail.html'


class {{name}}CreateView(CreateView):
    model = {{name}}
    form_class = {{name}}Form
    template_name = '{{app}}/{{route}}_form.html'
    success_url = reverse_lazy('{{app}}:{{route}}_list')


class {{name}}UpdateView(UpdateView):
    model = {{name}}
    form_class = {{name}}Form
    template_name = '{{app}}/{{route}}_form.html'
    success_url = reverse_lazy('{{app}}:{{route}}_list')


class {{name}}DeleteView(DeleteView):
    model = {{name}}
    template_name = '{{app}}/{{route}}_confirm_delete.html'
    success_url = reverse_lazy('{{app}}:{{route}}_list')"#;

pub static URLS_HEADER_TEMPLATE: &str = r#"from django.urls import path
from django.views.generic import TemplateView

from .views import *

app_name = '{{app}}'

urlpatterns = [
    path('', TemplateView.as_view(template_name='base.html'), name='index'),
"#;

pub static URL_ROUTES_TEMPLATE: &str = r#"    path('{{route}}/', {{name}}ListView.as_view(), name='{{route}}_list'),
    path('{{route}}/create/', {{name}}CreateView.as_view(), name='{{route}}_create'),
"#;

pub static URLS_FOOTER: &str = "]\n";
