/// Client-side behaviour shared by every exported page.
///
/// Each behaviour checks for the elements (and browser APIs) it needs before
/// attaching, so a page without a mobile toggle or an old browser without
/// `IntersectionObserver` still loads cleanly.
pub fn generate_script() -> String {
    SCRIPT.to_owned()
}

const SCRIPT: &str = r##"// ScopeStudio Export - Interactive Features
document.addEventListener('DOMContentLoaded', function () {
  // Smooth scrolling for in-page anchors.
  document.querySelectorAll('a[href^="#"]').forEach(function (link) {
    link.addEventListener('click', function (event) {
      var targetId = link.getAttribute('href').substring(1);
      if (!targetId) {
        return;
      }
      var target = document.getElementById(targetId);
      if (target) {
        event.preventDefault();
        target.scrollIntoView({ behavior: 'smooth', block: 'start' });
      }
    });
  });

  // Fade images in once loaded.
  document.querySelectorAll('img').forEach(function (img) {
    img.style.transition = 'opacity 0.3s ease-in-out';
    if (img.complete && img.naturalWidth > 0) {
      img.style.opacity = '1';
      return;
    }
    img.style.opacity = '0';
    img.addEventListener('load', function () {
      img.style.opacity = '1';
    });
    img.addEventListener('error', function () {
      img.style.opacity = '1';
    });
  });

  // Reveal sections as they scroll into view.
  var sections = document.querySelectorAll('.hero-content, .body-content');
  if (sections.length > 0 && 'IntersectionObserver' in window) {
    var observer = new IntersectionObserver(function (entries) {
      entries.forEach(function (entry) {
        if (entry.isIntersecting) {
          entry.target.style.opacity = '1';
          entry.target.style.transform = 'translateY(0)';
          observer.unobserve(entry.target);
        }
      });
    }, { threshold: 0.1, rootMargin: '0px 0px -50px 0px' });

    sections.forEach(function (section) {
      section.style.opacity = '0';
      section.style.transform = 'translateY(20px)';
      section.style.transition = 'opacity 0.6s ease-out, transform 0.6s ease-out';
      observer.observe(section);
    });
  }

  // Mobile navigation toggle.
  var toggle = document.querySelector('.mobile-menu-toggle');
  var menu = document.querySelector('.nav-menu');
  if (toggle && menu) {
    toggle.addEventListener('click', function () {
      var open = menu.classList.toggle('active');
      toggle.setAttribute('aria-expanded', open ? 'true' : 'false');
    });
  }
});
"##;
