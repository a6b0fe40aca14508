use std::fmt::Write;

use crate::model::config::ChartConfig;
use crate::model::sort::{ALPHABET_TAG, MEDIAN_TAG, SortMode};
use crate::report::escape_xml;
use crate::report::svg::{SceneLayer, render_chart_svg};

#[derive(Debug, Clone)]
pub struct PageInput<'a> {
    pub title: String,
    pub initial_mode: SortMode,
    /// Layers are looked up by `state`; see `app::PageView` for which one a
    /// click shows.
    pub layers: Vec<SceneLayer<'a>>,
    pub config: &'a ChartConfig,
}

const SCRIPT: &str = r#"(function () {
  var DIM = __DIM__;
  var ASPECT = __ASPECT__;
  var shown = '__INITIAL_MODE__';
  var container = document.getElementById('bar-chart');
  var svg = container.querySelector('svg');
  var tooltip = document.getElementById('tooltip');
  var select = document.getElementById('sort-btns');

  function bars(root) {
    return Array.prototype.slice.call(root.querySelectorAll('rect.bar'));
  }

  function hideTooltip() {
    bars(svg).forEach(function (r) { r.style.opacity = 1; });
    tooltip.style.opacity = 0;
  }

  function showState(state) {
    Array.prototype.slice.call(svg.querySelectorAll('g.scene')).forEach(function (g) {
      g.style.display = g.getAttribute('data-state') === state ? '' : 'none';
    });
    hideTooltip();
  }

  select.addEventListener('click', function (event) {
    var target = event.target;
    if (target.getAttribute('name') !== 'btnradio') return;
    var mode = target.id === 'alphabet' ? 'alphabet' : 'median';
    // Sorting again by the shown mode keeps the current order.
    if (mode === shown) return;
    shown = mode;
    showState(mode);
  });

  function line(text) {
    var d = document.createElement('div');
    d.textContent = text;
    return d;
  }

  svg.addEventListener('mouseover', function (event) {
    var bar = event.target.closest('rect.bar');
    if (!bar) return;
    bars(bar.closest('g.scene')).forEach(function (r) {
      r.style.opacity = r === bar ? 1 : DIM;
    });
    var box = document.createElement('div');
    box.appendChild(line('Tissue Site Detail: ' + bar.getAttribute('data-detail')));
    box.appendChild(line('Median: ' + bar.getAttribute('data-median')));
    box.appendChild(line('Tissue Site: ' + bar.getAttribute('data-site')));
    box.appendChild(line('eGene Count: ' + bar.getAttribute('data-egene')));
    tooltip.replaceChildren(box);
    tooltip.style.left = event.pageX + 'px';
    tooltip.style.top = event.pageY + 'px';
    tooltip.style.opacity = 1;
  });

  svg.addEventListener('mouseout', function (event) {
    if (event.target.closest('rect.bar')) hideTooltip();
  });

  function resize() {
    var targetWidth = parseInt(window.getComputedStyle(container).width, 10);
    if (!targetWidth) return;
    svg.setAttribute('width', targetWidth);
    svg.setAttribute('height', Math.round(targetWidth / ASPECT));
  }
  window.addEventListener('resize', resize);
  resize();
})();
"#;

pub fn render_page(input: &PageInput<'_>) -> String {
    let config = input.config;
    let mut html = String::with_capacity(64 * 1024);
    let title = escape_xml(&input.title);

    let _ = writeln!(html, "<!DOCTYPE html>");
    let _ = writeln!(html, "<html lang=\"en\">");
    let _ = writeln!(html, "<head>");
    let _ = writeln!(html, "<meta charset=\"utf-8\"/>");
    let _ = writeln!(
        html,
        "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\"/>"
    );
    let _ = writeln!(html, "<title>{}</title>", title);
    let _ = writeln!(html, "<style>");
    let _ = writeln!(
        html,
        "body{{font-family:Arial,Helvetica,sans-serif;margin:20px;color:#222;background:#fff;}}"
    );
    let _ = writeln!(html, "h1{{margin:0 0 12px 0;font-size:22px;}}");
    let _ = writeln!(html, ".sort-btns{{margin:0 0 12px 0;font-size:14px;}}");
    let _ = writeln!(html, ".sort-btns label{{margin:0 16px 0 4px;}}");
    let _ = writeln!(html, "#bar-chart{{width:100%;}}");
    let _ = writeln!(html, "#bar-chart svg{{display:block;}}");
    let _ = writeln!(html, "rect.bar{{transition:opacity {}ms;}}", config.fade_ms);
    let _ = writeln!(
        html,
        ".tooltip{{position:absolute;pointer-events:none;opacity:0;transition:opacity {}ms;background:#fff;border:1px solid #ccc;border-radius:4px;padding:6px 8px;font-size:12px;line-height:1.4;}}",
        config.fade_ms
    );
    let _ = writeln!(html, "</style>");
    let _ = writeln!(html, "</head>");
    let _ = writeln!(html, "<body>");
    let _ = writeln!(html, "<h1>{}</h1>", title);

    let _ = writeln!(
        html,
        "<div id=\"sort-btns\" class=\"sort-btns\" role=\"group\" aria-label=\"Sort order\">"
    );
    radio(&mut html, ALPHABET_TAG, "Alphabetical", input.initial_mode == SortMode::Alphabet);
    radio(&mut html, MEDIAN_TAG, "Median expression", input.initial_mode == SortMode::Median);
    let _ = writeln!(html, "</div>");

    let _ = writeln!(html, "<div id=\"bar-chart\">");
    html.push_str(&render_chart_svg(
        &input.layers,
        config,
        Some(&input.title),
        false,
    ));
    let _ = writeln!(html, "<div id=\"tooltip\" class=\"tooltip\"></div>");
    let _ = writeln!(html, "</div>");

    let script = SCRIPT
        .replace("__DIM__", &config.dim_opacity.to_string())
        .replace("__ASPECT__", &config.aspect().to_string())
        .replace("__INITIAL_MODE__", input.initial_mode.tag());
    let _ = writeln!(html, "<script>\n{}</script>", script);
    let _ = writeln!(html, "</body>");
    let _ = writeln!(html, "</html>");
    html
}

fn radio(html: &mut String, id: &str, label: &str, checked: bool) {
    let _ = writeln!(
        html,
        "<input type=\"radio\" name=\"btnradio\" id=\"{id}\" autocomplete=\"off\"{}/><label for=\"{id}\">{}</label>",
        if checked { " checked" } else { "" },
        label
    );
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/html.rs"]
mod tests;
