pub(super) const INDEX: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>DCF Valuation</title>
</head>
<body>
  <h1>DCF Valuation</h1>
  {{#if error}}<p class="error">{{error}}</p>{{/if}}
  <form method="post" action="/">
    <label>Ticker <input type="text" name="ticker" value="{{ticker}}" required></label>
    <label>Growth rate <input type="text" name="growth_rate" value="{{growth_rate}}" required></label>
    <label>Discount rate <input type="text" name="discount_rate" value="{{discount_rate}}" required></label>
    <label>Years <input type="text" name="years" value="{{years}}" required></label>
    <button type="submit">Calculate</button>
  </form>
</body>
</html>
"#;

pub(super) const RESULTS: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>DCF Valuation: {{ticker}}</title>
</head>
<body>
  <h1>DCF Valuation: {{ticker}}</h1>
  <p>Growth rate {{growth_rate}}, discount rate {{discount_rate}}, {{years}} years.</p>
  <table class="metrics">
    {{#each metrics}}
    <tr><th>{{label}}</th><td>{{value}}</td></tr>
    {{/each}}
  </table>
  <h2>Projections</h2>
  <table class="projections">
    <tr><th>Year</th><th>Projected FCF</th><th>Discount factor</th></tr>
    {{#each projections}}
    <tr><td>{{year}}</td><td>{{fcf}}</td><td>{{discount_factor}}</td></tr>
    {{/each}}
  </table>
  <p><a href="/">New valuation</a></p>
</body>
</html>
"#;
